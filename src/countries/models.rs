use serde::Deserialize;

/// One record of the restcountries `/v3.1/all` listing.
/// The upstream payload carries far more fields; only the display name is kept.
#[derive(Debug, Clone, Deserialize)]
pub struct Country {
    pub name: CountryName,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CountryName {
    pub common: String,
}

#[cfg(test)]
impl Country {
    pub fn mock(common: &str) -> Self {
        Self {
            name: CountryName {
                common: common.to_string(),
            },
        }
    }
}
