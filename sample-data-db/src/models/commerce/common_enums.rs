value_set! {
    /// ISO 3166-1 alpha-2 codes customers are spread across
    pub enum Country {
        Us => "US",
        De => "DE",
        Fr => "FR",
        In => "IN",
        Br => "BR",
    }
}

value_set! {
    pub enum ProductCategory {
        Books => "books",
        Electronics => "electronics",
        Apparel => "apparel",
        Home => "home",
        Sports => "sports",
    }
}

value_set! {
    pub enum OrderStatus {
        Pending => "pending",
        Shipped => "shipped",
        Delivered => "delivered",
        Cancelled => "cancelled",
    }
}
