use edgewise_core::heap::QueueStrategy;

/// An edge given on the command line as `A:B` or `A:B:WEIGHT`
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeSpec {
    pub a: String,
    pub b: String,
    pub weight: f64,
}

/// Parse `A:B[:WEIGHT]`. Weight defaults to 1.
pub fn parse_edge(s: &str) -> std::result::Result<EdgeSpec, String> {
    let parts: Vec<&str> = s.split(':').collect();
    let (a, b, weight) = match parts.as_slice() {
        [a, b] => (*a, *b, 1.0),
        [a, b, w] => {
            let weight = w
                .parse::<f64>()
                .map_err(|_| format!("invalid edge weight '{}'", w))?;
            (*a, *b, weight)
        }
        _ => return Err(format!("expected A:B or A:B:WEIGHT, got '{}'", s)),
    };

    if a.is_empty() || b.is_empty() {
        return Err(format!("edge endpoints must not be empty: '{}'", s));
    }

    Ok(EdgeSpec {
        a: a.to_string(),
        b: b.to_string(),
        weight,
    })
}

/// Parse a queue strategy name
pub fn parse_strategy(s: &str) -> std::result::Result<QueueStrategy, String> {
    s.parse::<QueueStrategy>().map_err(|e| e.to_string())
}
