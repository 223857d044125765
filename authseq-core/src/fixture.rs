//! The built-in dataset: supplier authorizations at six terminals.

use crate::models::{
    Authorization, AuthorizationRecord, EndDate, LocationId, SupplierId, Tier, Volume,
};
use time::macros::date;

/// Returns the built-in authorization dataset, in its canonical order.
///
/// The order matters: sequence numbers are assigned by arrival within each
/// priority stack.
#[rustfmt::skip]
pub fn load_fixture() -> Vec<AuthorizationRecord> {
    vec![
        // 201 DES MOINES
        raw("Lancer Energy Corp", 201, "DES MOINES", 201, "A", Tier::SelfSupply, None, Some(100_000), EndDate::On(date!(2026-05-31)), true),
        raw("Lancer Energy Corp", 201, "DES MOINES", 201, "E", Tier::SelfSupply, None, Some(67_000), EndDate::NoExpiry, true),
        raw("Lancer Energy Corp", 201, "DES MOINES", 201, "V", Tier::SelfSupply, None, Some(24_000), EndDate::NoExpiry, true),
        raw("Lancer Energy Corp", 201, "DES MOINES", 201, "X", Tier::SelfSupply, None, Some(57_000), EndDate::NoExpiry, true),
        raw("Lancer Energy Corp", 201, "DES MOINES", 201, "A78", Tier::SelfSupply, None, Some(72_000), EndDate::NoExpiry, true),
        raw("Thornfield Petroleum", 230, "DES MOINES", 201, "A", Tier::Monthly, Some(Volume::new(20_000, 19_000)), Some(20_000), EndDate::NoExpiry, true),
        raw("Thornfield Petroleum", 230, "DES MOINES", 201, "V", Tier::Weekly, Some(Volume::new(25_000, 20_000)), Some(25_000), EndDate::On(date!(2026-01-19)), true),
        raw("Thornfield Petroleum", 230, "DES MOINES", 201, "E", Tier::Unlimited, None, None, EndDate::NoExpiry, true),
        raw("Foxridge Supply Group", 263, "DES MOINES", 201, "A", Tier::Unlimited, None, None, EndDate::NoExpiry, true),
        raw("Foxridge Supply Group", 263, "DES MOINES", 201, "X", Tier::Daily, Some(Volume::new(7_000, 3_000)), Some(7_000), EndDate::NoExpiry, true),
        raw("Baxter Energy Group", 136, "DES MOINES", 201, "E", Tier::Weekly, Some(Volume::new(24_000, 15_000)), Some(24_000), EndDate::NoExpiry, true),
        raw("Baxter Energy Group", 136, "DES MOINES", 201, "A", Tier::Monthly, Some(Volume::new(98_000, 0)), Some(98_000), EndDate::NoExpiry, true),
        // 207 MASON CITY
        raw("Lancer Energy Corp", 201, "MASON CITY", 207, "A", Tier::SelfSupply, None, Some(38_000), EndDate::NoExpiry, true),
        raw("Lancer Energy Corp", 201, "MASON CITY", 207, "E", Tier::SelfSupply, None, Some(85_000), EndDate::NoExpiry, true),
        raw("Lancer Energy Corp", 201, "MASON CITY", 207, "V", Tier::SelfSupply, None, Some(26_000), EndDate::NoExpiry, true),
        raw("Lancer Energy Corp", 201, "MASON CITY", 207, "AR", Tier::SelfSupply, None, Some(69_000), EndDate::On(date!(2025-04-18)), true),
        raw("Questmark Energy", 160, "MASON CITY", 207, "A", Tier::Monthly, Some(Volume::new(100_000, 5_000)), Some(100_000), EndDate::NoExpiry, true),
        raw("Questmark Energy", 160, "MASON CITY", 207, "E", Tier::Unlimited, None, None, EndDate::NoExpiry, true),
        raw("Copperhead Energy", 179, "MASON CITY", 207, "V", Tier::Weekly, Some(Volume::new(20_000, 2_000)), Some(20_000), EndDate::On(date!(2027-07-13)), true),
        raw("Copperhead Energy", 179, "MASON CITY", 207, "X", Tier::Daily, Some(Volume::new(4_000, 2_000)), Some(4_000), EndDate::NoExpiry, true),
        raw("Ardent Fuel Solutions", 86, "MASON CITY", 207, "A", Tier::Monthly, Some(Volume::new(27_000, 15_000)), Some(27_000), EndDate::On(date!(2025-10-28)), true),
        // 347 BETTENDORF
        raw("Lancer Energy Corp", 201, "BETTENDORF", 347, "A", Tier::SelfSupply, None, Some(94_000), EndDate::NoExpiry, true),
        raw("Lancer Energy Corp", 201, "BETTENDORF", 347, "V", Tier::SelfSupply, None, Some(45_000), EndDate::NoExpiry, true),
        raw("Lancer Energy Corp", 201, "BETTENDORF", 347, "E", Tier::SelfSupply, None, Some(83_000), EndDate::NoExpiry, true),
        raw("Yarrow Energy Group", 242, "BETTENDORF", 347, "A", Tier::Weekly, Some(Volume::new(15_000, 1_000)), Some(15_000), EndDate::NoExpiry, true),
        raw("Yarrow Energy Group", 242, "BETTENDORF", 347, "V", Tier::Monthly, Some(Volume::new(87_000, 35_000)), Some(87_000), EndDate::NoExpiry, true),
        raw("Yarrow Energy Group", 242, "BETTENDORF", 347, "E", Tier::Daily, Some(Volume::new(10_000, 5_000)), Some(10_000), EndDate::NoExpiry, true),
        raw("Hillcrest Petroleum", 144, "BETTENDORF", 347, "A", Tier::Unlimited, None, None, EndDate::NoExpiry, true),
        raw("Hillcrest Petroleum", 144, "BETTENDORF", 347, "V", Tier::Monthly, Some(Volume::new(29_000, 5_000)), Some(29_000), EndDate::NoExpiry, true),
        raw("Hillcrest Petroleum", 144, "BETTENDORF", 347, "X", Tier::Daily, Some(Volume::new(3_000, 1_000)), Some(3_000), EndDate::On(date!(2026-09-06)), true),
        // 227 CARTHAGE
        raw("Lancer Energy Corp", 201, "CARTHAGE", 227, "A", Tier::SelfSupply, None, Some(35_000), EndDate::NoExpiry, true),
        raw("Lancer Energy Corp", 201, "CARTHAGE", 227, "V", Tier::SelfSupply, None, Some(50_000), EndDate::On(date!(2025-12-02)), true),
        raw("Wellspring Petroleum", 294, "CARTHAGE", 227, "A", Tier::Monthly, Some(Volume::new(96_000, 38_000)), Some(96_000), EndDate::NoExpiry, true),
        raw("Wellspring Petroleum", 294, "CARTHAGE", 227, "E", Tier::Daily, Some(Volume::new(9_000, 7_000)), Some(9_000), EndDate::On(date!(2027-05-23)), true),
        raw("Wellspring Petroleum", 294, "CARTHAGE", 227, "V", Tier::Unlimited, None, None, EndDate::NoExpiry, true),
        raw("Dalton Supply Partners", 140, "CARTHAGE", 227, "A", Tier::Weekly, Some(Volume::new(14_000, 6_000)), Some(14_000), EndDate::NoExpiry, true),
        raw("Dalton Supply Partners", 140, "CARTHAGE", 227, "V", Tier::Daily, Some(Volume::new(4_000, 0)), Some(4_000), EndDate::NoExpiry, true),
        raw("Dalton Supply Partners", 140, "CARTHAGE", 227, "X", Tier::Unlimited, None, None, EndDate::On(date!(2026-10-05)), true),
        // 245 GREAT BEND
        raw("Lancer Energy Corp", 201, "GREAT BEND", 245, "A", Tier::SelfSupply, None, Some(67_000), EndDate::NoExpiry, true),
        raw("Lancer Energy Corp", 201, "GREAT BEND", 245, "E", Tier::SelfSupply, None, Some(20_000), EndDate::NoExpiry, true),
        raw("Lancer Energy Corp", 201, "GREAT BEND", 245, "V", Tier::SelfSupply, None, Some(42_000), EndDate::On(date!(2026-11-08)), true),
        raw("Lancer Energy Corp", 201, "GREAT BEND", 245, "A5", Tier::SelfSupply, None, Some(99_000), EndDate::On(date!(2026-12-03)), true),
        raw("Lancer Energy Corp", 201, "GREAT BEND", 245, "B99", Tier::SelfSupply, None, Some(75_000), EndDate::NoExpiry, true),
        raw("Upland Crude Supply", 290, "GREAT BEND", 245, "A", Tier::Monthly, Some(Volume::new(97_000, 80_000)), Some(97_000), EndDate::NoExpiry, true),
        raw("Upland Crude Supply", 290, "GREAT BEND", 245, "V", Tier::Weekly, Some(Volume::new(20_000, 13_000)), Some(20_000), EndDate::NoExpiry, true),
        raw("Upland Crude Supply", 290, "GREAT BEND", 245, "E", Tier::Unlimited, None, None, EndDate::On(date!(2025-03-02)), false),
        raw("Upland Crude Supply", 290, "GREAT BEND", 245, "X", Tier::Daily, Some(Volume::new(4_000, 3_000)), Some(4_000), EndDate::On(date!(2027-02-07)), true),
        // 336 LINCOLN
        raw("Lancer Energy Corp", 201, "LINCOLN", 336, "A", Tier::SelfSupply, None, Some(39_000), EndDate::On(date!(2027-08-30)), true),
        raw("Lancer Energy Corp", 201, "LINCOLN", 336, "V", Tier::SelfSupply, None, Some(75_000), EndDate::NoExpiry, true),
        raw("Lancer Energy Corp", 201, "LINCOLN", 336, "V78", Tier::SelfSupply, None, Some(22_000), EndDate::On(date!(2026-12-24)), true),
        raw("Forrest Fuel Services", 142, "LINCOLN", 336, "A", Tier::Weekly, Some(Volume::new(17_000, 10_000)), Some(17_000), EndDate::NoExpiry, true),
        raw("Forrest Fuel Services", 142, "LINCOLN", 336, "V", Tier::Unlimited, None, None, EndDate::NoExpiry, true),
        raw("Forrest Fuel Services", 142, "LINCOLN", 336, "E", Tier::Monthly, Some(Volume::new(25_000, 0)), Some(25_000), EndDate::NoExpiry, true),
        raw("Forrest Fuel Services", 142, "LINCOLN", 336, "X", Tier::Weekly, Some(Volume::new(13_000, 12_000)), Some(13_000), EndDate::NoExpiry, true),
    ]
}

#[allow(clippy::too_many_arguments)]
fn raw(
    supplier: &str,
    supplier_id: u32,
    location: &str,
    location_id: u32,
    product_code: &str,
    tier: Tier,
    volume: Option<Volume>,
    renewal_volume: Option<u64>,
    end_date: EndDate,
    active: bool,
) -> AuthorizationRecord {
    AuthorizationRecord {
        location: location.to_owned(),
        location_id: LocationId(location_id),
        product_code: product_code.to_owned(),
        authorization: Authorization {
            supplier: supplier.to_owned(),
            supplier_id: SupplierId(supplier_id),
            tier,
            volume,
            renewal_volume,
            end_date,
            active,
        },
    }
}
