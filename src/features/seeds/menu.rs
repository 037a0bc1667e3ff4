//! 管理画面メニューの初期データ
//!
//! すべてのメニューはスーパー管理者ロールに紐づけられます。
//! 親メニューは子メニューより先に作成されるよう、主キー順に並んでいます。

use super::errors::SeedError;
use super::insert::create_if_not_exists;
use super::role::require_admin_role;
use super::seeder::Seeder;
use crate::models::Menu;
use rusqlite::Connection;

/// (id, name, title, icon, path, component, sort, parent_id, redirect)
type MenuRow = (
    i64,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    i64,
    i64,
    Option<&'static str>,
);

#[rustfmt::skip]
const MENU_ROWS: &[MenuRow] = &[
    (1, "System", "系统管理", "component", "/system", "Layout", 99, 0, Some("/system/user")),
    (2, "Admin", "管理员管理", "user", "admin", "/system/admin/index", 11, 1, None),
    (3, "Role", "角色管理", "peoples", "role", "/system/role/index", 12, 1, None),
    (4, "Menu", "菜单管理", "tree-table", "menu", "/system/menu/index", 13, 1, None),
    (5, "Api", "接口管理", "tree", "api", "/system/api/index", 14, 1, None),
    (6, "Log", "日志管理", "xitongrizhi", "/log", "Layout", 98, 0, Some("/log/operation-log")),
    (7, "OperationLog", "操作日志", "skill", "operation-log", "/log/operation-log/index", 21, 6, None),
    (8, "Business", "业务管理", "yewu", "/business", "Layout", 1, 0, None),
    (9, "Project", "项目管理", "xiangmu", "/business/project", "/business/project/index", 33, 8, None),
    (10, "Content", "内容管理", "education", "/content", "Layout", 2, 0, None),
    (11, "Tag", "标签管理", "24gf-tags2", "/content/tag", "/content/tag/index", 33, 10, None),
    (12, "Category", "分类管理", "nested", "/content/category", "/content/category/index", 33, 10, None),
    (13, "Article", "文章管理", "language", "/content/article", "/content/article/index", 33, 10, None),
    (14, "Config", "数据管理", "shuju", "/content/config", "/content/config/index", 33, 10, None),
    (15, "Resource", "资源管理", "ziyuan", "/content/resource", "/content/resource/index", 33, 10, None),
    (16, "User", "用户管理", "user", "/business/user", "/business/user/index", 33, 8, None),
    (17, "Column", "专栏管理", "documentation", "/content/column", "/content/column/index", 34, 10, None),
    (18, "Operations", "运营管理", "yunyingzhongxin", "/operations", "Layout", 999, 0, None),
    (19, "promotion", "广告位管理", "eye", "/operation/promotion", "/operation/promotion/index", 35, 18, None),
    (20, "comment", "评论管理", "message", "/operation/comment", "/operation/comment/index", 999, 18, None),
    (21, "point", "积分管理", "jifen", "/operation/point", "/operation/point/index", 999, 18, None),
    (22, "Store", "商城管理", "shopping", "/store", "Layout", 999, 0, None),
    (23, "ProductCategory", "商品分类", "list", "/store/product-category", "/store/product-category/index", 999, 22, None),
    (24, "ProductType", "商品类型", "theme", "/store/product-type", "/store/product-type/index", 1, 22, None),
    (25, "Spec", "规格管理", "guige", "/store/product-spec", "/store/product-spec/index", 1, 22, None),
    (26, "Product", "商品列表", "shangpinliebiao", "/store/product", "/store/product/index", 1, 22, None),
    (27, "Order", "订单管理", "shangpin-", "/order", "Layout", 1, 0, None),
    (28, "OrderList", "订单列表", "dingdanliebiao", "/store/order", "/store/order/index", 999, 27, None),
    (29, "AdminConfig", "后台配置", "peizhishezhi", "/system/config", "/system/config/index", 1, 1, None),
    (30, "Job", "定时任务", "time", "/system/job", "/system/job/index", 15, 1, None),
    (31, "Feedback", "反馈管理", "message", "/operation/feedback", "/operation/feedback/index", 999, 18, None),
    (32, "OrderLog", "订单日志", "log", "/store/order-log", "/store/order-log/index", 999, 27, None),
];

/// 初期メニュー一覧を作成する
///
/// # 引数
/// * `role_ids` - 各メニューに紐づけるロールID
pub fn default_menus(role_ids: &[i64]) -> Vec<Menu> {
    MENU_ROWS
        .iter()
        .map(
            |&(id, name, title, icon, path, component, sort, parent_id, redirect)| Menu {
                id,
                name: name.to_string(),
                title: title.to_string(),
                icon: Some(icon.to_string()),
                path: path.to_string(),
                redirect: redirect.map(str::to_string),
                component: component.to_string(),
                sort,
                parent_id,
                creator: "系统".to_string(),
                role_ids: role_ids.to_vec(),
            },
        )
        .collect()
}

/// メニューのシーダー
pub struct MenuSeeder;

impl Seeder for MenuSeeder {
    fn name(&self) -> &str {
        "menu"
    }

    /// # 処理内容
    /// 1. スーパー管理者ロールを取得（無ければ依存データエラー）
    /// 2. 主キー順にメニューを作成し、ロールとの関連を登録
    fn run(&self, conn: &Connection) -> Result<(), SeedError> {
        let role = require_admin_role(conn)?;

        let mut created = 0;
        for mut menu in default_menus(&[role.id]) {
            let id = menu.id;
            if create_if_not_exists(conn, &mut menu, id)? {
                created += 1;
            }
        }

        log::info!("メニューを{created}件作成しました");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_default_menus_ids_are_sequential() {
        let menus = default_menus(&[1]);
        assert_eq!(menus.len(), 32);
        for (index, menu) in menus.iter().enumerate() {
            assert_eq!(menu.id, index as i64 + 1);
            assert_eq!(menu.role_ids, vec![1]);
        }
    }

    #[test]
    fn test_parents_come_before_children() {
        let menus = default_menus(&[1]);
        let mut seen = HashSet::new();
        for menu in &menus {
            if menu.parent_id != 0 {
                assert!(
                    seen.contains(&menu.parent_id),
                    "menu {} references unseen parent {}",
                    menu.id,
                    menu.parent_id
                );
            }
            seen.insert(menu.id);
        }
    }

    #[test]
    fn test_root_menus_use_layout() {
        for menu in default_menus(&[1]) {
            if menu.parent_id == 0 {
                assert_eq!(menu.component, "Layout", "menu {}", menu.id);
            } else {
                assert_ne!(menu.component, "Layout", "menu {}", menu.id);
            }
        }
    }

    #[test]
    fn test_redirects() {
        let menus = default_menus(&[1]);
        assert_eq!(menus[0].redirect.as_deref(), Some("/system/user"));
        assert_eq!(menus[5].redirect.as_deref(), Some("/log/operation-log"));
        assert_eq!(menus.iter().filter(|m| m.redirect.is_some()).count(), 2);
    }
}
