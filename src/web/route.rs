use crate::locale::Translate;
use serde::Serialize;

/// Users allowed into the permission section.
pub const AUTHORITY: [&str; 2] = ["super", "admin"];

/// Display hints consumed by the admin shell.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteMeta {
    pub order: u32,
    pub icon: &'static str,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keep_alive: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_in_tab: Option<bool>,
    pub authority: Vec<&'static str>,
}

/// One entry of the admin navigation.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct RouteRecord {
    pub path: &'static str,
    pub name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<&'static str>,
    pub meta: RouteMeta,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RouteRecord>,
}

impl RouteRecord {
    /// Full path of a child, e.g. `/permission/roles`.
    pub fn child_path(&self, child: &RouteRecord) -> String {
        format!("{}/{}", self.path.trim_end_matches('/'), child.path)
    }
}

fn child<T: Translate + ?Sized>(
    path: &'static str,
    name: &'static str,
    order: u32,
    icon: &'static str,
    title_key: &str,
    hide_in_tab: Option<bool>,
    translator: &T,
) -> RouteRecord {
    RouteRecord {
        path,
        name,
        redirect: None,
        meta: RouteMeta {
            order,
            icon,
            title: translator.translate(title_key),
            keep_alive: None,
            hide_in_tab,
            authority: AUTHORITY.to_vec(),
        },
        children: Vec::new(),
    }
}

/// Navigation for the permission-management section.
pub fn permission_routes<T: Translate + ?Sized>(translator: &T) -> Vec<RouteRecord> {
    vec![RouteRecord {
        path: "/permission",
        name: "PermissionManagement",
        redirect: Some("/permission/roles"),
        meta: RouteMeta {
            order: 2002,
            icon: "lucide:shield-check",
            title: translator.translate("menu.permission.moduleName"),
            keep_alive: Some(true),
            hide_in_tab: None,
            authority: AUTHORITY.to_vec(),
        },
        children: vec![
            child(
                "permissions",
                "PermissionList",
                1,
                "lucide:shield-ellipsis",
                "menu.permission.permission",
                Some(false),
                translator,
            ),
            child(
                "roles",
                "RoleManagement",
                2,
                "lucide:shield-user",
                "menu.permission.role",
                Some(false),
                translator,
            ),
            child(
                "menus",
                "MenuManagement",
                3,
                "lucide:square-menu",
                "menu.permission.menu",
                None,
                translator,
            ),
        ],
    }]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_permission_routes() {
        let routes = permission_routes(&|key: &str| format!("[{}]", key));
        assert_eq!(routes.len(), 1);

        let section = &routes[0];
        assert_eq!(section.redirect, Some("/permission/roles"));
        assert_eq!(section.meta.title, "[menu.permission.moduleName]");
        assert_eq!(section.meta.order, 2002);

        let names: Vec<&str> = section.children.iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["PermissionList", "RoleManagement", "MenuManagement"]);
        let orders: Vec<u32> = section.children.iter().map(|r| r.meta.order).collect();
        assert_eq!(orders, vec![1, 2, 3]);
        assert_eq!(section.child_path(&section.children[1]), "/permission/roles");
        assert!(section
            .children
            .iter()
            .all(|r| r.meta.authority == vec!["super", "admin"]));
    }

    #[test]
    fn test_routes_serialize_camel_case() {
        let routes = permission_routes(&|key: &str| key.to_owned());
        let json = serde_json::to_value(&routes).expect("serializable");

        assert_eq!(json[0]["meta"]["keepAlive"], true);
        assert_eq!(json[0]["children"][0]["meta"]["hideInTab"], false);
        assert!(json[0]["children"][2]["meta"].get("hideInTab").is_none());
        assert!(json[0]["children"][0].get("children").is_none());
    }
}
