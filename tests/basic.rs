#[cfg(test)]
mod tests {
    use actix_web::http::{header, StatusCode};
    use actix_web::web::Data;
    use actix_web::{test, App};
    use permadmin::permission::memory::MemoryService;
    use permadmin::permission::store::PermissionStore;
    use permadmin::permission::Permission;
    use serde_json::{json, Value};
    use std::sync::Arc;

    fn store() -> Data<PermissionStore> {
        Data::new(PermissionStore::new(Arc::new(MemoryService::with_records(
            vec![
                Permission::new(3, Some(2), "menu.permission.role"),
                Permission::new(1, None, "menu.permission.moduleName"),
                Permission::new(2, Some(1), "menu.permission.permission"),
                Permission::new(4, Some(42), "menu.lost"),
            ],
        ))))
    }

    #[actix_rt::test]
    async fn test_section_redirects_to_roles() {
        let app = test::init_service(App::new().configure(permadmin::web::configure)).await;
        let req = test::TestRequest::get().uri("/permission").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(
            resp.headers().get(header::LOCATION).unwrap(),
            "/permission/roles"
        );
    }

    #[actix_rt::test]
    async fn test_routes_and_types() {
        let app = test::init_service(App::new().configure(permadmin::web::configure)).await;

        let req = test::TestRequest::get().uri("/permission/routes").to_request();
        let routes: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(routes[0]["name"], "PermissionManagement");
        assert_eq!(routes[0]["children"][2]["path"], "menus");

        let req = test::TestRequest::get().uri("/permission/types").to_request();
        let types: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(types.as_array().unwrap().len(), 6);
        assert_eq!(types[1]["value"], "MENU");
        assert_eq!(types[1]["color"], "#165DFF");
    }

    #[actix_rt::test]
    async fn test_tree_route() {
        let app = test::init_service(
            App::new()
                .app_data(store())
                .configure(permadmin::web::configure),
        )
        .await;
        let req = test::TestRequest::get().uri("/permission/tree").to_request();
        let tree: Vec<Permission> = test::call_and_read_body_json(&app, req).await;

        // Listing is sorted by id, so 3 finds 2 already attached and 4 stays orphaned.
        let top: Vec<u32> = tree.iter().map(|p| p.id).collect();
        assert_eq!(top, vec![1, 4]);
        assert_eq!(tree[0].children[0].id, 2);
        assert_eq!(tree[0].children[0].children[0].id, 3);
    }

    #[actix_rt::test]
    async fn test_permission_crud_routes() {
        let app = test::init_service(
            App::new()
                .app_data(store())
                .configure(permadmin::web::configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/permission/permissions")
            .set_json(json!({"name": "menu.new", "parentId": 1, "type": "BUTTON"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        assert_eq!(
            resp.headers().get(header::LOCATION).unwrap(),
            "/permission/permissions/5"
        );

        let req = test::TestRequest::patch()
            .uri("/permission/permissions/5")
            .set_json(json!({"name": "menu.renamed"}))
            .to_request();
        let updated: Permission = test::call_and_read_body_json(&app, req).await;
        assert_eq!(updated.name, "menu.renamed");
        assert_eq!(updated.parent_id, Some(1));

        let req = test::TestRequest::get()
            .uri("/permission/permissions?page=1&pageSize=2&orderBy=-id")
            .to_request();
        let listing: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(listing["total"], 5);
        assert_eq!(listing["items"][0]["id"], 5);
        assert_eq!(listing["items"][1]["id"], 4);

        let req = test::TestRequest::delete()
            .uri("/permission/permissions/5")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let req = test::TestRequest::get()
            .uri("/permission/permissions/5")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_rt::test]
    async fn test_bad_query_is_rejected() {
        let app = test::init_service(
            App::new()
                .app_data(store())
                .configure(permadmin::web::configure),
        )
        .await;
        let req = test::TestRequest::get()
            .uri("/permission/permissions?query=notjson")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
