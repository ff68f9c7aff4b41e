use serde::Serialize;

/// How a status should be presented: a success badge, a failure badge, or a
/// neutral in-progress indicator.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StatusClass {
    Success,
    Failure,
    Pending,
}

pub fn classify(status_id: i64) -> StatusClass {
    match status_id {
        3 => StatusClass::Success,
        4..=14 => StatusClass::Failure,
        _ => StatusClass::Pending,
    }
}

/// Canonical status names used by the execution service.
pub fn status_name(status_id: i64) -> Option<&'static str> {
    Some(match status_id {
        1 => "In Queue",
        2 => "Processing",
        3 => "Accepted",
        4 => "Wrong Answer",
        5 => "Time Limit Exceeded",
        6 => "Compilation Error",
        7 => "Runtime Error (SIGSEGV)",
        8 => "Runtime Error (SIGXFSZ)",
        9 => "Runtime Error (SIGFPE)",
        10 => "Runtime Error (SIGABRT)",
        11 => "Runtime Error (NZEC)",
        12 => "Runtime Error (Other)",
        13 => "Internal Error",
        14 => "Exec Format Error",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(classify(3), StatusClass::Success);
        for id in 4..=14 {
            assert_eq!(classify(id), StatusClass::Failure, "status {id}");
        }
        for id in [i64::MIN, -1, 0, 1, 2, 15, 99, 70000] {
            assert_eq!(classify(id), StatusClass::Pending, "status {id}");
        }
    }

    #[test]
    fn test_status_name() {
        assert_eq!(status_name(3), Some("Accepted"));
        assert_eq!(status_name(11), Some("Runtime Error (NZEC)"));
        assert_eq!(status_name(14), Some("Exec Format Error"));
        assert_eq!(status_name(15), None);
        assert_eq!(status_name(-3), None);
    }
}
