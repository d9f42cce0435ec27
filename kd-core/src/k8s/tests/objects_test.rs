use kd_api::ResourceStatus;

use super::*;
use crate::dataselect::{
    FilterQuery,
    PaginationQuery,
    PropertyName,
    SortQuery,
};

const BACKUPS_ALL_PATH: &str = "/apis/velero.io/v1/backups";

fn backups() -> Vec<Value> {
    vec![
        test_backup("b", TEST_NAMESPACE, "Completed", "2024-03-02T00:00:00Z"),
        test_backup("a", TEST_NAMESPACE, "Failed", "2024-03-01T00:00:00Z"),
        test_backup("c", TEST_OTHER_NAMESPACE, "InProgress", "2024-03-03T00:00:00Z"),
        test_backup("d", "kube-system", "PartiallyFailed", "2024-03-04T00:00:00Z"),
    ]
}

fn make_cell(obj: DynamicObject) -> ObjectCell {
    ObjectCell::new(obj, BACKUP_PLURAL)
}

fn cell_names(cells: &[ObjectCell]) -> Vec<String> {
    cells.iter().map(|c| c.obj.name_any()).collect()
}

#[rstest]
fn test_decode_items_reports_bad_items() {
    let list = object_list(VELERO_API_VERSION, BACKUP_KIND, vec![
        test_backup("a", TEST_NAMESPACE, "New", TEST_TIMESTAMP),
        json!({"metadata": "definitely not metadata"}),
        test_backup("b", TEST_NAMESPACE, "New", TEST_TIMESTAMP),
    ]);

    let (objs, errors) = decode_items(list);
    assert_len_eq_x!(objs, 2);
    assert_len_eq_x!(&errors, 1);
    assert_starts_with!(errors[0], "item 1:");
}

#[rstest]
fn test_decode_items_not_a_list() {
    let (objs, errors) = decode_items(json!("nope"));
    assert_is_empty!(objs);
    assert_is_empty!(errors);
}

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_list_objects_all_namespaces() {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    fake_apiserver.handle_crd(backup_crd()).handle(|when, then| {
        when.method(GET).path(BACKUPS_ALL_PATH);
        then.json_body(object_list(VELERO_API_VERSION, BACKUP_KIND, backups()));
    });
    fake_apiserver.build();

    let query = DataSelectQuery::new(
        FilterQuery::default(),
        SortQuery { keys: vec![(PropertyName::Name, true)] },
        PaginationQuery::new(2, 1),
    );
    let page = list_objects(
        &CrdResolver::new(client.clone()),
        &DynamicRestAdapter::new(client),
        BACKUP_CRD_NAME,
        &NamespaceQuery::all(),
        &query,
        make_cell,
    )
    .await
    .unwrap();

    assert_eq!(cell_names(&page.items), vec!["a", "b"]);
    assert_eq!(page.total, 4);
    assert_eq!(page.status, ResourceStatus { running: 1, pending: 1, succeeded: 1, failed: 1 });
    assert_is_empty!(page.errors);
    fake_apiserver.assert();
}

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_list_objects_single_namespace_in_path() {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    fake_apiserver.handle_crd(backup_crd()).handle(|when, then| {
        when.method(GET).path(format!("{VELERO_PATH_PREFIX}/namespaces/{TEST_NAMESPACE}/backups"));
        then.json_body(object_list(VELERO_API_VERSION, BACKUP_KIND, backups()[..2].to_vec()));
    });
    fake_apiserver.build();

    let page = list_objects(
        &CrdResolver::new(client.clone()),
        &DynamicRestAdapter::new(client),
        BACKUP_CRD_NAME,
        &NamespaceQuery::from_param(Some(TEST_NAMESPACE)),
        &DataSelectQuery::default(),
        make_cell,
    )
    .await
    .unwrap();

    assert_eq!(cell_names(&page.items), vec!["b", "a"]);
    fake_apiserver.assert();
}

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_list_objects_several_namespaces_filtered() {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    fake_apiserver.handle_crd(backup_crd()).handle(|when, then| {
        when.method(GET).path(BACKUPS_ALL_PATH);
        then.json_body(object_list(VELERO_API_VERSION, BACKUP_KIND, backups()));
    });
    fake_apiserver.build();

    let query = DataSelectQuery {
        filter: FilterQuery { terms: vec![(PropertyName::Status, "Fail".into())] },
        ..Default::default()
    };
    let page = list_objects(
        &CrdResolver::new(client.clone()),
        &DynamicRestAdapter::new(client),
        BACKUP_CRD_NAME,
        &NamespaceQuery::from_param(Some("velero,team-a")),
        &query,
        make_cell,
    )
    .await
    .unwrap();

    // kube-system is dropped before the status summary and the filter
    assert_eq!(cell_names(&page.items), vec!["a"]);
    assert_eq!(page.total, 1);
    assert_eq!(page.status.total(), 3);
    fake_apiserver.assert();
}

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_list_objects_unknown_crd() {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    fake_apiserver
        .handle_not_found(format!("{CRD_PATH_PREFIX}/{TEST_WIDGET_CRD_NAME}"))
        .build();

    let res = list_objects(
        &CrdResolver::new(client.clone()),
        &DynamicRestAdapter::new(client),
        TEST_WIDGET_CRD_NAME,
        &NamespaceQuery::all(),
        &DataSelectQuery::default(),
        make_cell,
    )
    .await;
    assert_matches!(error_kind(&res.unwrap_err()), Some(ResourceError::NotFound(_)));
    fake_apiserver.assert();
}
