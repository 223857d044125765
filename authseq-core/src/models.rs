mod catalog;
mod date;
mod enriched;
mod health;
mod ids;
mod key;
mod map;
mod record;
mod status;
mod tier;
mod volume;

pub use catalog::{ProductCatalog, ProductName};
pub use date::{EndDate, EndDateError, NO_EXPIRY};
pub use enriched::EnrichedRecord;
pub use health::{CellHealth, Health, HealthCounts, HealthPolicy, LaneHealth};
pub use ids::{LocationId, RecordId, SupplierId};
pub use key::GroupKey;
pub use map::Map;
pub use record::{Authorization, AuthorizationDto, AuthorizationRecord, RecordError};
pub use status::{EXPIRY_WARNING, Status};
pub use tier::Tier;
pub use volume::{FillLevel, Volume, VolumeError};
