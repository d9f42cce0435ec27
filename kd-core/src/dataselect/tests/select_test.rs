use super::*;

fn sorted_by(keys: Vec<(PropertyName, bool)>) -> SortQuery {
    SortQuery { keys }
}

fn filtered_by(terms: Vec<(PropertyName, ComparableValue)>) -> FilterQuery {
    FilterQuery { terms }
}

#[rstest]
fn test_select_empty() {
    let (page, total) = select(Vec::<TestCell>::new(), &DataSelectQuery::default());
    assert_is_empty!(page);
    assert_eq!(total, 0);
}

#[rstest]
fn test_select_no_query_preserves_order(cells: Vec<TestCell>) {
    let (page, total) = select(cells.clone(), &DataSelectQuery::default());
    assert_eq!(page, cells);
    assert_eq!(total, 4);
}

#[rstest]
fn test_select_sort_then_paginate() {
    let cells = vec![TestCell::new("b", 2000, "Completed"), TestCell::new("a", 1000, "Failed")];
    let query = DataSelectQuery::new(
        FilterQuery::default(),
        sorted_by(vec![(PropertyName::Name, true)]),
        PaginationQuery::new(1, 1),
    );

    let (page, total) = select(cells, &query);
    assert_eq!(names(&page), vec!["a"]);
    assert_eq!(total, 2);
}

#[rstest]
fn test_select_filter_preserves_order() {
    let cells = vec![
        TestCell::new("x", 1000, "Failed"),
        TestCell::new("y", 2000, "Completed"),
        TestCell::new("z", 3000, "Failed"),
    ];
    let query = DataSelectQuery { filter: filtered_by(vec![(PropertyName::Status, "Fail".into())]), ..Default::default() };

    let (page, total) = select(cells, &query);
    assert_eq!(names(&page), vec!["x", "z"]);
    assert_eq!(total, 2);
}

#[rstest]
fn test_select_page_out_of_range(cells: Vec<TestCell>) {
    let query = DataSelectQuery { pagination: PaginationQuery::new(10, 5), ..Default::default() };
    let (page, total) = select(cells[..3].to_vec(), &query);
    assert_is_empty!(page);
    assert_eq!(total, 3);
}

#[rstest]
#[case::zero(0)]
#[case::negative(-3)]
fn test_select_page_before_start(cells: Vec<TestCell>, #[case] page_num: i64) {
    let query = DataSelectQuery { pagination: PaginationQuery::new(2, page_num), ..Default::default() };
    let (page, total) = select(cells, &query);
    assert_is_empty!(page);
    assert_eq!(total, 4);
}

#[rstest]
fn test_select_no_limit(cells: Vec<TestCell>) {
    let query = DataSelectQuery { pagination: PaginationQuery::new(-1, 7), ..Default::default() };
    let (page, _) = select(cells, &query);
    assert_len_eq_x!(page, 4);
}

#[rstest]
fn test_select_total_ignores_pagination(cells: Vec<TestCell>) {
    let filter = filtered_by(vec![(PropertyName::Status, "Failed".into())]);
    for page_num in 1..=3 {
        let query = DataSelectQuery::new(filter.clone(), SortQuery::default(), PaginationQuery::new(1, page_num));
        let (_, total) = select(cells.clone(), &query);
        assert_eq!(total, 2);
    }
}

#[rstest]
fn test_select_pages_partition(cells: Vec<TestCell>) {
    let sort = sorted_by(vec![(PropertyName::CreationTimestamp, false)]);
    let (everything, _) = select(cells.clone(), &DataSelectQuery { sort: sort.clone(), ..Default::default() });

    let mut stitched = vec![];
    for page_num in 1..=3 {
        let query = DataSelectQuery::new(FilterQuery::default(), sort.clone(), PaginationQuery::new(3, page_num));
        stitched.extend(select(cells.clone(), &query).0);
    }
    assert_eq!(stitched, everything);
    assert_eq!(names(&everything), vec!["d", "c", "b", "a"]);
}

#[rstest]
fn test_select_stable_with_noop_key(cells: Vec<TestCell>) {
    let by_status = sorted_by(vec![(PropertyName::Status, true)]);
    let by_status_then_unknown =
        sorted_by(vec![(PropertyName::Status, true), (PropertyName::Unknown("nope".into()), false)]);

    let (first, _) = select(cells.clone(), &DataSelectQuery { sort: by_status, ..Default::default() });
    let (second, _) = select(cells, &DataSelectQuery { sort: by_status_then_unknown, ..Default::default() });

    // ties between the two Failed cells stay in input order
    assert_eq!(names(&first), vec!["b", "a", "d", "c"]);
    assert_eq!(first, second);
}

#[rstest]
fn test_select_idempotent(cells: Vec<TestCell>) {
    let query = DataSelectQuery::new(
        filtered_by(vec![(PropertyName::Name, "".into())]),
        sorted_by(vec![(PropertyName::Name, false)]),
        PaginationQuery::new(2, 1),
    );

    let (page, _) = select(cells, &query);
    let (again, _) = select(page.clone(), &query);
    assert_eq!(again, page);
}

#[rstest]
fn test_select_filter_unknown_property_rejects(cells: Vec<TestCell>) {
    let query = DataSelectQuery {
        filter: filtered_by(vec![(PropertyName::Unknown("flavor".into()), "".into())]),
        ..Default::default()
    };
    let (page, total) = select(cells, &query);
    assert_is_empty!(page);
    assert_eq!(total, 0);
}

#[rstest]
fn test_select_missing_property_sorts_first() {
    let mut partial = TestCell::new("partial", 1000, "InProgress");
    partial.progress = Some(5);
    let mut done = TestCell::new("done", 2000, "Completed");
    done.progress = Some(10);
    let fresh = TestCell::new("fresh", 3000, "New");

    let query = DataSelectQuery { sort: sorted_by(vec![(PropertyName::Progress, true)]), ..Default::default() };
    let (page, _) = select(vec![done.clone(), partial.clone(), fresh.clone()], &query);
    assert_eq!(names(&page), vec!["fresh", "partial", "done"]);

    let query = DataSelectQuery { sort: sorted_by(vec![(PropertyName::Progress, false)]), ..Default::default() };
    let (page, _) = select(vec![fresh, partial, done], &query);
    assert_eq!(names(&page), vec!["done", "partial", "fresh"]);
}

#[rstest]
fn test_select_multi_key() {
    let cells = vec![
        TestCell::new("b", 1000, "Failed"),
        TestCell::new("a", 1000, "Failed"),
        TestCell::new("c", 500, "Failed"),
    ];
    let query = DataSelectQuery {
        sort: sorted_by(vec![(PropertyName::CreationTimestamp, false), (PropertyName::Name, true)]),
        ..Default::default()
    };

    let (page, _) = select(cells, &query);
    assert_eq!(names(&page), vec!["a", "b", "c"]);
}

#[rstest]
fn test_resource_selector() {
    let sel = TestCell::new("a", 0, "New").resource_selector();
    assert_eq!(sel.resource_name, "a");
    assert_eq!(sel.resource_type, "test");
}
