value_set! {
    pub enum MetricName {
        CpuUsage => "cpu_usage",
        DbConnections => "db_connections",
        QueryLatencyMs => "query_latency_ms",
        ErrorRate => "error_rate",
    }
}

value_set! {
    /// Deployment environment a metric is tagged with
    pub enum Environment {
        Staging => "staging",
        Production => "production",
    }
}

value_set! {
    pub enum AlertName {
        HighCpu => "High CPU",
        ReplicaLag => "Replica Lag",
        SlowQuery => "Slow Query",
        ErrorSpike => "Error Spike",
    }
}

value_set! {
    pub enum Severity {
        Critical => "critical",
        Warning => "warning",
        Info => "info",
    }
}

value_set! {
    pub enum LogService {
        Auth => "auth",
        Api => "api",
        Worker => "worker",
        Billing => "billing",
    }
}

value_set! {
    pub enum LogLevel {
        Debug => "DEBUG",
        Info => "INFO",
        Warn => "WARN",
        Error => "ERROR",
    }
}
