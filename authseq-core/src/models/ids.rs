macro_rules! id_wrapper {
    ($struct:ident, $doc:literal) => {
        #[doc = $doc]
        #[derive(Debug, Hash, PartialEq, Eq, Clone, Copy, PartialOrd, Ord)]
        #[cfg_attr(
            feature = "serde",
            derive(serde::Serialize, serde::Deserialize),
            serde(transparent)
        )]
        #[repr(transparent)]
        pub struct $struct(pub u32);

        impl From<u32> for $struct {
            fn from(value: u32) -> Self {
                Self(value)
            }
        }

        impl From<$struct> for u32 {
            fn from(value: $struct) -> Self {
                value.0
            }
        }

        impl std::str::FromStr for $struct {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(s.trim().parse()?))
            }
        }

        impl std::ops::Deref for $struct {
            type Target = u32;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl std::fmt::Display for $struct {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

id_wrapper!(SupplierId, "Identifies the selling counterparty of an authorization");
id_wrapper!(LocationId, "Identifies a terminal");
id_wrapper!(
    RecordId,
    "Stable identity of a loaded record, assigned once as its 1-based input position"
);
