use crate::config::BookingConfig;

pub const NAME_MAX_LEN: usize = 50;
pub const ADDRESS_MAX_LEN: usize = 2000;
pub const ID_CARD_LEN: usize = 9;

/// Limits applied by the field validators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRules {
    pub name_max_len: usize,
    pub address_max_len: usize,
    pub address_allows_period: bool,
    pub id_card_len: usize,
}

impl FieldRules {
    pub fn new() -> Self {
        FieldRules {
            name_max_len: NAME_MAX_LEN,
            address_max_len: ADDRESS_MAX_LEN,
            address_allows_period: false,
            id_card_len: ID_CARD_LEN,
        }
    }

    pub fn from_config(config: &BookingConfig) -> Self {
        FieldRules {
            address_max_len: config.address_max_length,
            address_allows_period: config.address_allows_period,
            ..Self::new()
        }
    }
}

impl Default for FieldRules {
    fn default() -> Self {
        Self::new()
    }
}
