#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Prices {
    pub currency: String,
    pub currency_symbol: String,
    pub compute: Price,
    pub storage: Storage,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Price {
    pub hourly_price: String,
    pub monthly_price: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Storage {
    pub local: Price,
    pub central: Price,
}
