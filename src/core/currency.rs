use serde::{Deserialize, Serialize};
use std::fmt;

/// Currencies accepted by the checkout gateway
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Ethiopian Birr
    #[default]
    ETB,
}

impl Currency {
    /// ISO 4217 code as sent on the wire
    pub fn code(&self) -> &'static str {
        match self {
            Currency::ETB => "ETB",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
