string_enum! {
    /// Load balancing algorithm
    pub enum Balance {
        RoundRobin => "roundrobin",
        LeastConn => "leastconn",
        Source => "source",
    }
}

string_enum! {
    /// Health check HTTP method
    pub enum Method {
        Get => "GET",
        Head => "HEAD",
        Post => "POST",
        Options => "OPTIONS",
    }
}
