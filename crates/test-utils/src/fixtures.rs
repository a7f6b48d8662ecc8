//! Common observation documents for heatmap tests.
//!
//! Each fixture is the raw JSON a producer would write to stdin, so tests
//! exercise decoding as well as the later pipeline stages.

/// Hourly documents.
pub mod day {
    /// One reporting counter and one missing counter, listed out of order.
    pub const SPARSE: &str = r#"{"day":"2024-01-01","counters":[
        {"name":"B","hours":[{"hour":3,"count":5}]},
        {"name":"A","missing":true}
    ]}"#;

    /// Three counters with a full day of data, including zeros.
    pub const FULL: &str = r#"{"day":"Tue Jul 2","counters":[
        {"name":"Vernon","hours":[
            {"hour":0,"count":0},{"hour":1,"count":0},{"hour":2,"count":1},{"hour":3,"count":0},
            {"hour":4,"count":0},{"hour":5,"count":2},{"hour":6,"count":9},{"hour":7,"count":31},
            {"hour":8,"count":52},{"hour":9,"count":40},{"hour":10,"count":28},{"hour":11,"count":30},
            {"hour":12,"count":33},{"hour":13,"count":29},{"hour":14,"count":35},{"hour":15,"count":47},
            {"hour":16,"count":61},{"hour":17,"count":58},{"hour":18,"count":37},{"hour":19,"count":22},
            {"hour":20,"count":15},{"hour":21,"count":9},{"hour":22,"count":4},{"hour":23,"count":2}
        ]},
        {"name":"Agricola","hours":[
            {"hour":7,"count":12},{"hour":8,"count":25},{"hour":16,"count":19},{"hour":17,"count":23}
        ]},
        {"name":"South Park","hours":[
            {"hour":8,"count":14},{"hour":12,"count":0},{"hour":17,"count":18}
        ]}
    ]}"#;

    /// A single zero count.
    pub const ZERO_ONLY: &str = r#"{"day":"2024-02-29","counters":[
        {"name":"Quiet","hours":[{"hour":12,"count":0}]}
    ]}"#;

    /// No counters at all.
    pub const EMPTY: &str = r#"{"day":"2024-01-01","counters":[]}"#;

    /// Hour outside 0-23.
    pub const HOUR_OUT_OF_RANGE: &str = r#"{"day":"2024-01-01","counters":[
        {"name":"A","hours":[{"hour":24,"count":1}]}
    ]}"#;

    /// Same name listed as missing and as reporting.
    pub const CONFLICTING: &str = r#"{"day":"2024-01-01","counters":[
        {"name":"A","missing":true},
        {"name":"A","hours":[{"hour":1,"count":1}]}
    ]}"#;
}

/// Weekly documents.
pub mod week {
    /// Two counters with partial weeks and one missing counter.
    pub const PARTIAL: &str = r#"{"week":"Jan 7","counters":[
        {"name":"Windsor","days":[{"day":"Mon","count":410},{"day":"Tue","count":0},{"day":"Sat","count":388}]},
        {"name":"Hollis","missing":true,"days":[]},
        {"name":"Barrington","days":[{"day":"Sun","count":120},{"day":"Wed","count":95}]}
    ]}"#;

    /// Weekday key that is not one of the canonical abbreviations.
    pub const BAD_WEEKDAY: &str = r#"{"week":"Jan 7","counters":[
        {"name":"A","days":[{"day":"Monday","count":1}]}
    ]}"#;

    /// No counters at all.
    pub const EMPTY: &str = r#"{"week":"Jan 7","counters":[]}"#;
}

/// Inputs that are not valid documents.
pub mod invalid {
    pub const NOT_JSON: &str = "counters: [A, B]";
    pub const TRUNCATED: &str = r#"{"day":"2024-01-01","counters":[{"name":"A""#;
    pub const NOT_AN_OBJECT: &str = "[1, 2, 3]";
    pub const NAME_MISSING: &str = r#"{"day":"2024-01-01","counters":[{"hours":[]}]}"#;
}
