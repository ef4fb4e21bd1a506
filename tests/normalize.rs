use watch_scope as ws;

fn names(raw: &str) -> Vec<String> {
    ws::normalize(raw).into_vec()
}

#[test]
fn test_single_namespace() {
    assert_eq!(names("default"), vec!["default"]);
}

#[test]
fn test_two_namespaces() {
    assert_eq!(names("default,kube-system"), vec!["default", "kube-system"]);
}

#[test]
fn test_three_namespaces() {
    assert_eq!(names("ns-a,ns-b,ns-c"), vec!["ns-a", "ns-b", "ns-c"]);
}

#[test]
fn test_whitespace_trimmed() {
    assert_eq!(names(" default , kube-system "), vec!["default", "kube-system"]);
}

#[test]
fn test_duplicates_removed() {
    assert_eq!(names("default,kube-system,default"), vec!["default", "kube-system"]);
}

#[test]
fn test_empty_segments_ignored() {
    assert_eq!(names("default,,kube-system,"), vec!["default", "kube-system"]);
}

#[test]
fn test_all_empty() {
    assert!(names(",,").is_empty());
    assert!(names("").is_empty());
    assert!(names(" , ").is_empty());
}
