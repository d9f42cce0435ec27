use super::*;

const WIDGETS_PATH: &str = "/apis/example.io/v1/widgets";

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_list_cluster_scoped_ignores_namespace(widget_crd: Value) {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    fake_apiserver.handle_crd(widget_crd).handle(|when, then| {
        when.method(GET).path(WIDGETS_PATH);
        then.json_body(object_list("example.io/v1", "Widget", vec![
            test_widget("cog", "2024-03-02T00:00:00Z"),
            test_widget(TEST_WIDGET_NAME, TEST_TIMESTAMP),
        ]));
    });
    fake_apiserver.build();
    let ctx = test_ctx(client);

    let list = crd::list(
        rocket::State::from(&ctx),
        TEST_WIDGET_CRD_NAME,
        TEST_NAMESPACE,
        params(None, Some("a,creationTimestamp"), None, None),
    )
    .await
    .unwrap()
    .into_inner();

    assert_eq!(list.type_meta.kind, "Widget");
    let names: Vec<_> = list.items.iter().map(|w| w.object_meta.name.as_str()).collect();
    assert_eq!(names, vec![TEST_WIDGET_NAME, "cog"]);
    assert_eq!(list.list_meta.total_items, 2);
    fake_apiserver.assert();
}

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_list_all_velero_crd(backup_crd: Value) {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    fake_apiserver.handle_crd(backup_crd).handle(|when, then| {
        when.method(GET).path(format!("{VELERO_PATH_PREFIX}/backups"));
        then.json_body(object_list(VELERO_API_VERSION, BACKUP_KIND, vec![test_backup(
            TEST_BACKUP_NAME,
            TEST_NAMESPACE,
            "Completed",
            TEST_TIMESTAMP,
        )]));
    });
    fake_apiserver.build();
    let ctx = test_ctx(client);

    let list = crd::list_all(rocket::State::from(&ctx), BACKUP_CRD_NAME, params(None, None, None, None))
        .await
        .unwrap()
        .into_inner();

    assert_len_eq_x!(&list.items, 1);
    assert_eq!(list.items[0].type_meta.kind, BACKUP_KIND);
    assert_eq!(list.items[0].object_meta.uid, "velero-nightly-uid");
    fake_apiserver.assert();
}

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_list_bad_crd_name() {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    fake_apiserver.build();
    let ctx = test_ctx(client);

    let res = crd::list_all(rocket::State::from(&ctx), "widgets", params(None, None, None, None)).await;
    assert_matches!(res, Err(ApiError::BadRequest(_)));
}

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_list_not_a_list(widget_crd: Value) {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    fake_apiserver.handle_crd(widget_crd).handle(|when, then| {
        when.method(GET).path(WIDGETS_PATH);
        then.json_body(json!({"kind": "WidgetList", "items": "nope"}));
    });
    fake_apiserver.build();
    let ctx = test_ctx(client);

    let res = crd::list_all(rocket::State::from(&ctx), TEST_WIDGET_CRD_NAME, params(None, None, None, None)).await;
    assert_matches!(res, Err(ApiError::BadGateway(_)));
}

#[rstest]
#[traced_test]
#[tokio::test]
async fn test_detail_passthrough(widget_crd: Value) {
    let (mut fake_apiserver, client) = make_fake_apiserver();
    fake_apiserver.handle_crd(widget_crd).handle(|when, then| {
        when.method(GET).path(format!("{WIDGETS_PATH}/{TEST_WIDGET_NAME}"));
        then.json_body(test_widget(TEST_WIDGET_NAME, TEST_TIMESTAMP));
    });
    fake_apiserver.build();
    let ctx = test_ctx(client);

    let obj = crd::detail(rocket::State::from(&ctx), TEST_WIDGET_CRD_NAME, TEST_NAMESPACE, TEST_WIDGET_NAME)
        .await
        .unwrap()
        .into_inner();
    assert_eq!(obj, test_widget(TEST_WIDGET_NAME, TEST_TIMESTAMP));
    fake_apiserver.assert();
}
