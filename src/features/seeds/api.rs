//! 権限制御の対象となる接口の初期データ
//!
//! 主キーは一覧の並び順（1始まり）で固定されます。

use super::errors::SeedError;
use super::insert::create_if_not_exists;
use super::seeder::Seeder;
use crate::models::Api;
use rusqlite::Connection;

/// (method, path, category, desc)
type ApiRow = (&'static str, &'static str, &'static str, &'static str);

#[rustfmt::skip]
const API_ROWS: &[ApiRow] = &[
    ("POST", "/base/login", "base", "管理员登录"),
    ("POST", "/base/logout", "base", "管理员登出"),
    ("POST", "/base/refreshToken", "base", "刷新JWT令牌"),
    ("POST", "/admin/info", "admin", "获取当前登录管理员信息"),
    ("GET", "/admin/list", "admin", "获取管理员列表"),
    ("PUT", "/admin/changePwd", "admin", "更新管理员登录密码"),
    ("POST", "/admin/create", "admin", "创建管理员"),
    ("PATCH", "/admin/update/:userID", "admin", "更新管理员"),
    ("DELETE", "/admin/delete/batch", "admin", "批量删除管理员"),
    ("GET", "/role/list", "role", "获取角色列表"),
    ("POST", "/role/create", "role", "创建角色"),
    ("PATCH", "/role/update/:roleID", "role", "更新角色"),
    ("GET", "/role/menus/get/:roleID", "role", "获取角色的权限菜单"),
    ("PATCH", "/role/menus/update/:roleID", "role", "更新角色的权限菜单"),
    ("GET", "/role/apis/get/:roleID", "role", "获取角色的权限接口"),
    ("PATCH", "/role/apis/update/:roleID", "role", "更新角色的权限接口"),
    ("DELETE", "/role/delete/batch", "role", "批量删除角色"),
    ("GET", "/menu/list", "menu", "获取菜单列表"),
    ("GET", "/menu/tree", "menu", "获取菜单树"),
    ("POST", "/menu/create", "menu", "创建菜单"),
    ("PATCH", "/menu/update/:menuID", "menu", "更新菜单"),
    ("DELETE", "/menu/delete/batch", "menu", "批量删除菜单"),
    ("GET", "/menu/access/list/:userID", "menu", "获取管理员的可访问菜单列表"),
    ("GET", "/menu/access/tree/:userID", "menu", "获取管理员的可访问菜单树"),
    ("GET", "/api/list", "api", "获取接口列表"),
    ("GET", "/api/tree", "api", "获取接口树"),
    ("POST", "/api/create", "api", "创建接口"),
    ("PATCH", "/api/update/:roleID", "api", "更新接口"),
    ("DELETE", "/api/delete/batch", "api", "批量删除接口"),
    ("GET", "/log/operation/list", "log", "获取操作日志列表"),
    ("DELETE", "/log/operation/delete/batch", "log", "批量删除操作日志"),
    ("GET", "/project/:projectID", "project", "获取单条项目详情"),
    ("GET", "/project", "project", "获取项目列表"),
    ("POST", "/project", "project", "创建项目"),
    ("PATCH", "/project/:projectID", "project", "更新项目"),
    ("DELETE", "/project", "project", "批量删除项目"),
    ("GET", "/config/:configID", "config", "获取单条配置详情"),
    ("GET", "/config", "config", "获取配置列表"),
    ("POST", "/config", "config", "创建配置"),
    ("PATCH", "/config/:configID", "config", "更新配置"),
    ("DELETE", "/config", "config", "批量删除配置"),
    ("GET", "/tag/:tagID", "tag", "获取单条标签详情"),
    ("GET", "/tag", "tag", "获取标签列表"),
    ("POST", "/tag", "tag", "创建标签"),
    ("PATCH", "/tag/:tagID", "tag", "更新标签"),
    ("DELETE", "/tag", "tag", "批量删除标签"),
    ("GET", "/category/:categoryID", "category", "获取分类信息"),
    ("GET", "/category/tree", "category", "获取分类树"),
    ("GET", "/category", "category", "获取分类列表"),
    ("POST", "/category", "category", "创建分类"),
    ("PATCH", "/category/:categoryID", "category", "更新分类"),
    ("DELETE", "/category", "category", "批量删除分类"),
    ("GET", "/post/:postID", "post", "获取单条内容详情"),
    ("GET", "/post", "post", "获取内容列表"),
    ("POST", "/post", "post", "创建内容"),
    ("PATCH", "/post/:postID", "post", "更新内容"),
    ("PUT", "/post/:postID", "post", "发布内容"),
    ("DELETE", "/post", "post", "批量删除内容"),
    ("GET", "/user/:userID", "user", "获取单个用户详情"),
    ("GET", "/user", "user", "获取用户列表"),
    ("GET", "/user/search", "user", "搜索用户列表"),
    ("POST", "/user", "user", "创建用户"),
    ("PATCH", "/user/:userID", "user", "更新用户"),
    ("DELETE", "/user", "user", "批量删除用户"),
    ("POST", "/resource/upload", "resource", "上传资源"),
    ("GET", "/resource", "resource", "获取资源列表"),
    ("GET", "/resource/:resourceID", "resource", "获取资源详情"),
    ("PATCH", "/resource/:resourceID", "resource", "更新资源信息"),
    ("DELETE", "/resource", "resource", "删除资源"),
    ("POST", "/column", "column", "新增专栏"),
    ("GET", "/column", "column", "获取专栏列表"),
    ("GET", "/column/:columnID", "column", "获取专栏详情"),
    ("PATCH", "/column/:columnID", "column", "更新专栏信息"),
    ("DELETE", "/column", "column", "删除专栏"),
];

/// 初期接口一覧を作成する
pub fn default_apis() -> Vec<Api> {
    API_ROWS
        .iter()
        .zip(1..)
        .map(|(&(method, path, category, desc), id)| Api {
            id,
            method: method.to_string(),
            path: path.to_string(),
            category: category.to_string(),
            desc: Some(desc.to_string()),
            creator: "系统".to_string(),
        })
        .collect()
}

/// 接口のシーダー
pub struct ApiSeeder;

impl Seeder for ApiSeeder {
    fn name(&self) -> &str {
        "api"
    }

    fn run(&self, conn: &Connection) -> Result<(), SeedError> {
        let mut created = 0;
        for mut api in default_apis() {
            let id = api.id;
            if create_if_not_exists(conn, &mut api, id)? {
                created += 1;
            }
        }

        log::info!("接口を{created}件作成しました");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_default_apis_ids_are_sequential() {
        let apis = default_apis();
        assert_eq!(apis.len(), 74);
        for (index, api) in apis.iter().enumerate() {
            assert_eq!(api.id, index as i64 + 1);
        }
        assert_eq!(apis[0].path, "/base/login");
        assert_eq!(apis[73].path, "/column");
        assert_eq!(apis[73].method, "DELETE");
    }

    #[test]
    fn test_method_and_path_pairs_are_unique() {
        let apis = default_apis();
        let pairs: HashSet<(&str, &str)> = apis
            .iter()
            .map(|api| (api.method.as_str(), api.path.as_str()))
            .collect();
        assert_eq!(pairs.len(), apis.len());
    }

    #[test]
    fn test_methods_are_known_verbs() {
        for api in default_apis() {
            assert!(
                ["GET", "POST", "PUT", "PATCH", "DELETE"].contains(&api.method.as_str()),
                "api {} uses {}",
                api.id,
                api.method
            );
            assert!(api.path.starts_with('/'), "api {}", api.id);
        }
    }
}
