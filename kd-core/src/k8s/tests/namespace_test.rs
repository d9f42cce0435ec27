use super::*;

#[rstest]
#[case::missing(None)]
#[case::empty(Some(""))]
#[case::all(Some("_all"))]
#[case::all_in_list(Some("velero,_all"))]
fn test_namespace_query_all(#[case] raw: Option<&str>) {
    let q = NamespaceQuery::from_param(raw);
    assert!(q.is_all());
    assert_none!(q.to_request_param());
    assert!(q.matches("anything"));
}

#[rstest]
fn test_namespace_query_single() {
    let q = NamespaceQuery::from_param(Some("velero"));
    assert_eq!(q.to_request_param(), Some("velero"));
    assert!(q.matches("velero"));
    assert!(!q.matches("team-a"));
}

#[rstest]
fn test_namespace_query_several() {
    let q = NamespaceQuery::from_param(Some("velero, team-a,,velero"));
    assert_eq!(q.namespaces(), &["team-a".to_string(), "velero".to_string()]);
    assert_none!(q.to_request_param());
    assert!(q.matches("team-a"));
    assert!(!q.matches("kube-system"));
}
