/// A card category as shown in the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub is_premium: bool,
    pub price: f64,
    pub version: String,
    /// Visual style token for the session (e.g. `AURA_NEON_PURPLE`)
    pub style_key: Option<String>,
}
