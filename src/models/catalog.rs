//! エンティティカタログ
//!
//! 管理コンソールが永続化するすべてのエンティティの記述子を定義します。
//! 並び順は自動マイグレーションの順序と一致します。

use super::schema::{ColumnDef, ColumnType, EntityDescriptor, IndexDef, JoinTableDef};
use ColumnType::*;

fn col(name: &str, column_type: ColumnType) -> ColumnDef {
    ColumnDef::new(name, column_type)
}

/// 状態カラム（1正常、2禁用）
fn status(column_type: ColumnType, comment: &str) -> ColumnDef {
    col("status", column_type).default_value("1").comment(comment)
}

pub fn user() -> EntityDescriptor {
    EntityDescriptor::new("user", "用户")
        .column(col("user_id", Char(10)).unique().comment("字符ID，分布式 ID"))
        .column(col("username", Varchar(30)).unique().comment("用户名"))
        .column(col("project_id", Char(10)).index().comment("项目ID"))
        .column(col("password", Varchar(255)).comment("密码"))
        .column(col("nickname", Varchar(30)).comment("昵称"))
        .column(col("email", Varchar(30)).unique().comment("邮箱"))
        .column(col("phone", Varchar(21)).unique().comment("电话"))
        .column(col("sex", Char(1)).default_value("'M'").comment("M:男 F:女"))
        .column(status(TinyInt, "用户状态，1-正常；2-禁用"))
        .column(col("birthday", Date).nullable().comment("用户生日，格式为YYYY-MM-DD"))
        .column(col("avatar_url", Varchar(255)).nullable().comment("头像地址"))
}

pub fn admin() -> EntityDescriptor {
    EntityDescriptor::new("admin", "管理员")
        .column(col("username", Varchar(20)).unique())
        .column(col("password", Varchar(255)))
        .column(col("mobile", Varchar(11)).unique())
        .column(col("avatar", Varchar(255)).nullable())
        .column(col("nickname", Varchar(20)).nullable())
        .column(col("introduction", Varchar(255)).nullable())
        .column(status(TinyInt, "1正常, 2禁用"))
        .column(col("creator", Varchar(20)).nullable())
        .many_to_many(JoinTableDef::new("admin_roles", "admin_id", "role", "role_id"))
}

pub fn user_event() -> EntityDescriptor {
    EntityDescriptor::new("user_event", "用户事件")
        .column(col("user_id", Varchar(10)).index().comment("用户ID"))
        .column(col("project_id", Char(10)).index().comment("项目ID"))
        .column(
            col("event_type", SmallInt)
                .default_value("1")
                .index()
                .comment("事件类型，1-浏览"),
        )
        .column(col("object_id", Varchar(10)).nullable().comment("事件对象ID"))
        .column(col("ip", Varchar(255)).nullable().comment("IP地址"))
        .column(col("ext", Text).nullable().comment("扩展字段"))
}

pub fn role() -> EntityDescriptor {
    EntityDescriptor::new("role", "角色")
        .column(col("name", Varchar(20)).unique())
        .column(col("keyword", Varchar(20)).unique())
        .column(col("desc", Varchar(100)).nullable())
        .column(status(SmallInt, "1正常, 2禁用"))
        .column(
            col("sort", Integer)
                .default_value("999")
                .comment("角色排序(排序越大权限越低, 排序为1表示超级管理员)"),
        )
        .column(col("creator", Varchar(20)).nullable())
        .many_to_many(JoinTableDef::new("role_menus", "role_id", "menu", "menu_id"))
}

pub fn menu() -> EntityDescriptor {
    EntityDescriptor::new("menu", "菜单")
        .column(col("name", Varchar(50)).comment("菜单名称"))
        .column(col("title", Varchar(50)).comment("菜单标题"))
        .column(col("icon", Varchar(50)).nullable().comment("菜单图标"))
        .column(col("path", Varchar(100)).comment("菜单访问路径"))
        .column(col("redirect", Varchar(100)).nullable().comment("重定向路径"))
        .column(col("component", Varchar(100)).comment("前端组件路径"))
        .column(col("sort", Integer).default_value("999").comment("菜单顺序"))
        .column(status(TinyInt, "菜单状态(正常/禁用, 默认正常)"))
        .column(col("hidden", TinyInt).default_value("2").comment("菜单在侧边栏隐藏(1隐藏，2显示)"))
        .column(col("no_cache", TinyInt).default_value("2").comment("菜单是否被 <keep-alive> 缓存(1不缓存，2缓存)"))
        .column(col("always_show", TinyInt).default_value("2").comment("忽略之前定义的规则，一直显示根路由(1忽略，2不忽略)"))
        .column(col("breadcrumb", TinyInt).default_value("1").comment("面包屑可见性(可见/隐藏, 默认可见)"))
        .column(col("active_menu", Varchar(100)).nullable().comment("在其它路由时，想在侧边栏高亮的路由"))
        .column(col("parent_id", Integer).default_value("0").comment("父菜单编号(编号为0时表示根菜单)"))
        .column(col("creator", Varchar(20)).nullable().comment("创建人"))
}

pub fn api() -> EntityDescriptor {
    EntityDescriptor::new("api", "接口")
        .column(col("method", Varchar(20)).nullable().comment("请求方式"))
        .column(col("path", Varchar(100)).nullable().comment("访问路径"))
        .column(col("category", Varchar(50)).nullable().comment("所属类别"))
        .column(col("desc", Varchar(100)).nullable().comment("说明"))
        .column(col("creator", Varchar(20)).nullable().comment("创建人"))
}

pub fn post() -> EntityDescriptor {
    EntityDescriptor::new("post", "文章")
        .column(col("post_id", Char(10)).unique().comment("唯一字符ID/分布式ID"))
        .column(col("category_id", Varchar(10)).nullable().index().comment("分类 ID"))
        .column(col("project_id", Varchar(10)).nullable().index().comment("项目 ID"))
        .column(col("column_id", Varchar(10)).nullable().index().comment("专栏ID"))
        .column(col("user_id", Varchar(10)).nullable().index().comment("用户ID"))
        .column(col("author", Varchar(30)).comment("作者"))
        .column(col("title", Varchar(255)).comment("标题"))
        .column(col("content", LongText).comment("内容"))
        .column(col("html_content", LongText).comment("html内容"))
        .column(col("description", Varchar(300)).comment("描述"))
        .column(col("ext", Text).nullable().comment("扩展字段"))
        .column(col("icon", Varchar(255)).nullable().comment("图标"))
        .column(col("tag", Varchar(30)).nullable().comment("tag"))
        .column(col("view", Integer).default_value("1").comment("阅读量"))
        .column(col("type", TinyInt).default_value("1").comment("类型，1.文章 2.page 3.短文"))
        .column(col("is_top", TinyInt).default_value("2").comment("是否置顶：1-启用;2-禁用"))
        .column(col("is_passwd", TinyInt).default_value("2").comment("是否加密：1-启用;2-禁用"))
        .column(col("password", Varchar(255)).comment("密码"))
        .column(status(TinyInt, "状态，1-草稿；2-发布"))
        .with_index(IndexDef::new("idx_username", &["author"], false))
}

pub fn tag() -> EntityDescriptor {
    EntityDescriptor::new("tag", "标签")
        .column(col("tag_id", Varchar(10)).unique().comment("唯一字符ID/分布式ID"))
        .column(col("title", Varchar(255)).unique().comment("标题"))
        .column(col("description", Varchar(300)).comment("描述"))
        .column(col("color", Varchar(20)).nullable().comment("颜色"))
}

pub fn category() -> EntityDescriptor {
    EntityDescriptor::new("category", "分类")
        .column(col("category_id", Char(10)).unique().comment("唯一字符ID/分布式ID"))
        .column(col("parent_id", Integer).nullable().default_value("0").comment("父菜单编号(编号为0时表示根菜单)"))
        .column(col("sort", Integer).default_value("1").comment("排序"))
        .column(col("icon", Varchar(255)).nullable().comment("图标"))
        .column(col("title", Varchar(255)).comment("标题"))
        .column(col("path", Varchar(100)).nullable().comment("url"))
        .column(col("hidden", SmallInt).default_value("1").comment("1显示，2隐藏"))
        .column(col("description", Varchar(300)).comment("描述"))
        .column(col("ext", Text).nullable().comment("扩展字段"))
        .column(status(SmallInt, "状态，1-正常；2-禁用"))
}

pub fn column() -> EntityDescriptor {
    EntityDescriptor::new("column", "专栏")
        .column(col("column_id", Char(10)).comment("字符ID，分布式ID"))
        .column(col("project_id", Char(10)).index().comment("项目ID"))
        .column(col("title", Varchar(30)).comment("标题"))
        .column(col("description", Varchar(300)).nullable().comment("描述"))
        .column(col("icon", Varchar(300)).nullable().comment("图片"))
        .column(col("info", Text).nullable().comment("内容"))
        .column(col("ext", Text).nullable().comment("扩展字段"))
        .column(status(SmallInt, "状态，1-正常；2-禁用"))
        .with_index(IndexDef::new("idx_column_column_id", &["column_id"], true))
}

pub fn comment() -> EntityDescriptor {
    EntityDescriptor::new("comment", "评论")
        .column(col("comment_id", Varchar(10)).unique().comment("唯一字符ID/分布式ID"))
        .column(col("project_id", Varchar(10)).index().comment("项目ID"))
        .column(col("content", Text).comment("内容"))
        .column(col("html_content", Text).comment("HTML内容"))
        .column(status(SmallInt, "状态，1-待审核；2-审核通过").index())
        .column(col("object_id", Varchar(10)).index().comment("评论主题ID"))
        .column(col("object_type", SmallInt).default_value("1").index().comment("评论对象类型，1-文章；2-商品"))
        .column(col("type", SmallInt).default_value("1").comment("评论类型，1-评论；2-回复"))
        .column(col("user_id", Varchar(10)).index().comment("用户ID"))
        .column(col("to_user_id", Varchar(10)).index().comment("被评论用户ID"))
        .column(col("parent_id", Integer).default_value("0").comment("父评论ID"))
        .column(col("reply_to_id", Integer).default_value("0").comment("回复的评论ID"))
        .column(col("hot", Integer).nullable().default_value("0").comment("热度"))
        .column(col("like", Integer).nullable().default_value("0").comment("点赞数"))
        .column(col("dislike", Integer).nullable().default_value("0").comment("踩数"))
        .column(col("ip", Varchar(255)).comment("IP地址"))
        .column(col("country", Varchar(255)).comment("国家"))
        .column(col("region_name", Varchar(255)).comment("地区"))
        .column(col("city", Varchar(255)).comment("城市"))
}

pub fn project() -> EntityDescriptor {
    EntityDescriptor::new("project", "项目")
        .column(col("project_id", Char(10)).unique().comment("字符ID，分布式 ID"))
        .column(col("name", Varchar(30)).unique().comment("项目名称"))
        .column(col("title", Varchar(100)).comment("标题"))
        .column(col("description", Varchar(300)).comment("描述"))
        .column(col("keywords", Varchar(255)).nullable().comment("SEO关键词"))
        .column(col("domain", Varchar(100)).nullable().comment("域名"))
        .column(col("post_url", Varchar(255)).nullable().comment("文章URL模板"))
        .column(col("icp", Varchar(100)).nullable().comment("ICP备案号"))
        .column(col("author", Varchar(30)).nullable().comment("作者"))
        .column(col("info", Text).nullable().comment("项目信息"))
        .column(col("base_url", Varchar(255)).nullable().comment("基础URL"))
        .column(col("favicon", Varchar(255)).nullable().comment("网站图标"))
        .column(col("nav_image", Varchar(255)).nullable().comment("导航图片"))
        .column(col("baidu_analytics", Varchar(255)).nullable().comment("百度统计"))
        .column(col("public_security", Varchar(100)).nullable().comment("公安备案号"))
        .column(col("push_token", Varchar(255)).nullable().comment("推送token"))
}

pub fn config() -> EntityDescriptor {
    EntityDescriptor::new("config", "配置")
        .column(col("config_id", Char(10)).unique().comment("字符ID，分布式 ID"))
        .column(col("project_id", Char(10)).index().comment("项目ID"))
        .column(col("alias", Varchar(20)).unique().comment("别名"))
        .column(col("title", Varchar(30)).comment("标题"))
        .column(col("description", Varchar(300)).comment("描述"))
        .column(col("type", TinyInt).default_value("1").comment("类型，1表示普通配置2:json类型"))
        .column(col("info", LongText).comment("内容"))
        .column(col("md_content", LongText).comment("MD内容"))
        .column(status(TinyInt, "状态，1-正常；2-禁用"))
}

pub fn resource() -> EntityDescriptor {
    EntityDescriptor::new("resource", "资源")
        .column(col("resource_id", Char(10)).unique().comment("唯一字符ID/分布式ID"))
        .column(col("title", Varchar(255)).comment("标题"))
        .column(col("path", Varchar(255)).comment("路径"))
        .column(col("url", Varchar(255)).comment("当前域名"))
        .column(col("file_extension", Char(10)).comment("文件拓展"))
        .column(col("file_type", TinyInt).default_value("1").comment("资源类形，1-图片;2-文件;3-视频;4-音频"))
        .column(col("description", Varchar(300)).comment("描述"))
        .column(col("size", Integer).default_value("0").comment("文件大小"))
        .column(status(TinyInt, "状态，1-正常；2-禁用"))
}

pub fn ad_scene() -> EntityDescriptor {
    EntityDescriptor::new("ad_scene", "广告位")
        .column(col("ad_scene_id", Char(10)).unique().comment("唯一字符ID/分布式ID"))
        .column(col("title", Varchar(255)).comment("标题"))
        .column(col("description", Varchar(300)).comment("描述"))
        .column(col("project_id", Char(10)).index().comment("项目ID"))
}

pub fn ad() -> EntityDescriptor {
    EntityDescriptor::new("ad", "广告")
        .column(col("ad_id", Char(10)).unique().comment("唯一字符ID/分布式ID"))
        .column(col("scene_id", Char(10)).index().comment("广告位ID"))
        .column(col("title", Varchar(255)).comment("标题"))
        .column(col("description", Varchar(300)).comment("描述"))
        .column(col("image", Varchar(255)).nullable().comment("图片"))
        .column(col("video", Varchar(255)).nullable().comment("视频"))
        .column(col("url", Varchar(255)).nullable().comment("跳转地址"))
        .column(col("url_type", TinyInt).default_value("1").comment("跳转类型"))
        .column(col("sort", Integer).default_value("1").comment("排序"))
        .column(col("ext", Text).nullable().comment("扩展字段"))
        .column(status(TinyInt, "状态，1-正常；2-禁用"))
}

pub fn point_log() -> EntityDescriptor {
    EntityDescriptor::new("point_log", "积分明细")
        .column(col("project_id", Char(10)).index().comment("项目ID"))
        .column(col("user_id", Varchar(10)).index().comment("用户ID"))
        .column(col("type", Varchar(20)).comment("类型"))
        .column(col("reason", Varchar(255)).comment("原因"))
        .column(col("event_id", Varchar(50)).nullable().comment("事件ID"))
        .column(col("points", BigInt).comment("积分数值(分)"))
}

pub fn point_deduction() -> EntityDescriptor {
    EntityDescriptor::new("point_deduction", "积分扣减")
        .column(col("project_id", Char(10)).index().comment("项目ID"))
        .column(col("user_id", Varchar(10)).nullable().index().comment("用户ID"))
        .column(col("points", BigInt).comment("积分数值(分)"))
        .column(col("points_detail_id", Integer).nullable().comment("积分明细ID"))
        .column(col("available_points_id", Integer).comment("可用积分表ID"))
}

pub fn point_available() -> EntityDescriptor {
    EntityDescriptor::new("point_available", "可用积分")
        .column(col("project_id", Char(10)).index().comment("项目ID"))
        .column(col("user_id", Varchar(10)).index().comment("用户ID"))
        .column(col("points", BigInt).comment("积分数值(分)"))
        .column(col("points_log_id", Integer).comment("积分明细ID"))
        .column(col("expiration_date", DateTime).nullable().comment("过期时间"))
}

pub fn product_category() -> EntityDescriptor {
    EntityDescriptor::new("product_category", "商品分类")
        .column(col("product_category_id", Char(10)).unique().comment("唯一字符ID/分布式ID"))
        .column(col("project_id", Char(10)).index().comment("项目ID"))
        .column(col("parent_id", Integer).nullable().default_value("0").comment("父分类编号"))
        .column(col("title", Varchar(255)).comment("标题"))
        .column(col("icon", Varchar(255)).nullable().comment("图标"))
        .column(col("path", Varchar(100)).nullable().comment("url"))
        .column(col("sort", Integer).default_value("1").comment("排序"))
        .column(col("hidden", SmallInt).default_value("1").comment("1显示，2隐藏"))
        .column(col("description", Varchar(300)).comment("描述"))
        .column(status(SmallInt, "状态，1-正常；2-禁用"))
}

pub fn product_type() -> EntityDescriptor {
    EntityDescriptor::new("product_type", "商品类型")
        .column(col("product_type_id", Char(10)).unique().comment("唯一字符ID/分布式ID"))
        .column(col("title", Varchar(255)).comment("标题"))
        .column(col("remark", Varchar(50)).comment("备注"))
        .column(col("product_category_id", Char(10)).comment("分类ID"))
        .column(col("spec_ids", Varchar(255)).comment("规格编号"))
        .with_index(IndexDef::new(
            "idx_product_type_category_id",
            &["product_category_id"],
            false,
        ))
        .with_index(IndexDef::new("idx_product_type_spec_ids", &["spec_ids"], false))
}

pub fn product_spec() -> EntityDescriptor {
    EntityDescriptor::new("product_spec", "商品规格")
        .column(col("product_spec_id", Varchar(10)).unique().comment("唯一字符ID/分布式ID"))
        .column(col("title", Varchar(255)).comment("标题"))
        .column(col("remark", Varchar(50)).comment("备注"))
        .column(col("format", SmallInt).default_value("1").comment("规格类型:1-文字,2-图片"))
        .column(col("image", Varchar(255)).nullable().comment("图片"))
        .column(col("sort", SmallInt).default_value("1").comment("排序"))
}

pub fn product_spec_item() -> EntityDescriptor {
    EntityDescriptor::new("product_spec_item", "商品规格值")
        .column(col("item_id", Char(10)).unique().comment("唯一字符ID/分布式ID"))
        .column(col("spec_id", Char(10)).nullable().comment("规格ID"))
        .column(col("title", Varchar(255)).comment("标题"))
        .column(col("sort", SmallInt).default_value("1").comment("排序"))
}

pub fn product() -> EntityDescriptor {
    EntityDescriptor::new("product", "商品")
        .column(col("product_id", Char(10)).unique().comment("唯一字符ID/分布式ID"))
        .column(col("title", Varchar(255)).comment("标题"))
        .column(col("product_number", Varchar(255)).comment("商品货号"))
        .column(col("project_id", Varchar(10)).nullable().index().comment("项目 ID"))
        .column(col("description", Varchar(300)).comment("产品卖点/描述"))
        .column(col("image", Varchar(255)).comment("产品主图"))
        .column(col("video", Varchar(255)).comment("产品视频"))
        .column(col("buy_limit", TinyInt).default_value("1").comment("购买限制"))
        .column(col("category_id", Char(10)).index().comment("分类ID"))
        .column(col("product_spec", Varchar(2048)).comment("产品规格"))
        .column(col("content", LongText).nullable().comment("内容"))
        .column(col("enable", TinyInt).default_value("1").comment("是否启用：1-下架；2-上架"))
}

pub fn product_sku() -> EntityDescriptor {
    EntityDescriptor::new("product_sku", "商品SKU")
        .column(col("sku_id", Varchar(10)).unique().comment("唯一字符ID/分布式ID"))
        .column(col("title", Varchar(255)).comment("标题"))
        .column(col("project_id", Varchar(10)).nullable().index().comment("项目 ID"))
        .column(col("product_id", Varchar(10)).nullable().index().comment("产品ID"))
        .column(col("image", Varchar(255)).comment("产品主图"))
        .column(col("video", Varchar(255)).comment("产品视频"))
        .column(col("cost_price", BigInt).comment("成本价(分)"))
        .column(col("unit_price", BigInt).comment("商品价格(分)"))
        .column(col("market_price", BigInt).comment("市场价格(分)"))
        .column(col("quantity", Integer).comment("库存"))
        .column(col("unit_point", BigInt).comment("积分数值(分)"))
        .column(col("enable_default", SmallInt).default_value("1").comment("是否启用：1-正常；2-默认"))
}

pub fn order() -> EntityDescriptor {
    EntityDescriptor::new("order", "订单")
        .column(col("order_id", Char(10)).unique().comment("唯一字符ID/分布式ID"))
        .column(col("order_number", Varchar(64)).unique().comment("订单号"))
        .column(col("order_type", TinyInt).default_value("1").comment("订单类型"))
        .column(col("project_id", Char(10)).index().comment("项目ID"))
        .column(col("user_id", Varchar(10)).index().comment("用户ID"))
        .column(col("product_id", Char(10)).index().comment("商品ID"))
        .column(col("product_name", Varchar(255)).comment("商品名称"))
        .column(col("product_sku", Varchar(10)).comment("商品SKU"))
        .column(col("product_image", Varchar(255)).nullable().comment("商品图片"))
        .column(col("quantity", Integer).default_value("1").comment("数量"))
        .column(col("unit_price", BigInt).comment("单价(分)"))
        .column(col("amount", BigInt).comment("订单金额(分)"))
        .column(col("amount_pay", BigInt).comment("实付金额(分)"))
        .column(col("pay_method", TinyInt).default_value("1").comment("支付方式"))
        .column(col("pay_status", TinyInt).default_value("1").comment("支付状态"))
        .column(col("pay_time", DateTime).nullable().comment("支付时间"))
        .column(col("refund_status", TinyInt).default_value("1").comment("退款状态"))
        .column(col("refund_time", DateTime).nullable().comment("退款时间"))
        .column(col("remark", Varchar(255)).nullable().comment("用户备注"))
        .column(col("remark_admin", Varchar(255)).nullable().comment("管理员备注"))
        .column(col("consignee_name", Varchar(50)).nullable().comment("收货人"))
        .column(col("consignee_phone", Varchar(21)).nullable().comment("收货电话"))
        .column(col("consignee_province", Varchar(50)).nullable().comment("省"))
        .column(col("consignee_city", Varchar(50)).nullable().comment("市"))
        .column(col("consignee_district", Varchar(50)).nullable().comment("区"))
        .column(col("consignee_street", Varchar(100)).nullable().comment("街道"))
        .column(col("consignee_address", Varchar(255)).nullable().comment("详细地址"))
        .column(status(TinyInt, "订单状态"))
}

pub fn order_log() -> EntityDescriptor {
    EntityDescriptor::new("order_log", "订单日志")
        .column(col("order_log_id", Char(10)).unique().comment("唯一字符ID/分布式ID"))
        .column(col("order_id", Char(10)).index().comment("订单ID"))
        .column(col("remark", Varchar(255)).comment("备注"))
}

pub fn system_config() -> EntityDescriptor {
    EntityDescriptor::new("system_config", "系统配置")
        .column(col("system_config_id", Varchar(10)).unique().comment("唯一字符ID/分布式ID"))
        .column(col("title", Varchar(255)).unique().comment("标题"))
        .column(col("content", Text).comment("内容"))
        .column(col("logo", Varchar(255)).nullable().comment("logo"))
        .column(col("icon", Varchar(255)).nullable().comment("icon"))
        .column(col("footer", Varchar(255)).nullable().comment("footer"))
}

pub fn operation_log() -> EntityDescriptor {
    EntityDescriptor::new("operation_log", "操作日志")
        .column(col("username", Varchar(20)).nullable().comment("用户登录名"))
        .column(col("ip", Varchar(20)).nullable().comment("Ip地址"))
        .column(col("ip_location", Varchar(20)).nullable().comment("Ip所在地"))
        .column(col("method", Varchar(20)).nullable().comment("请求方式"))
        .column(col("path", Varchar(100)).nullable().comment("访问路径"))
        .column(col("desc", Varchar(100)).nullable().comment("说明"))
        .column(col("status", Integer).nullable().comment("响应状态码"))
        .column(col("start_time", DateTime).nullable().comment("发起时间"))
        .column(col("time_cost", Integer).nullable().comment("请求耗时(ms)"))
        .column(col("user_agent", Varchar(20)).nullable().comment("浏览器标识"))
}

pub fn third_party_accounts() -> EntityDescriptor {
    EntityDescriptor::new("third_party_accounts", "第三方账号")
        .column(col("user_id", Varchar(10)).nullable().index().comment("用户ID"))
        .column(col("platform", Varchar(50)).comment("平台"))
        .column(col("bind_flag", SmallInt).nullable().default_value("1").comment("是否绑定,2绑定"))
        .column(col("open_id", Varchar(255)).unique().comment("openID"))
}

pub fn feedback() -> EntityDescriptor {
    EntityDescriptor::new("feedback", "反馈")
        .column(col("project_id", Char(10)).index().comment("项目ID"))
        .column(col("user_id", Varchar(10)).index().comment("用户ID"))
        .column(col("title", Varchar(255)).comment("标题"))
        .column(col("content", Text).comment("内容"))
        .column(col("phone", Varchar(21)).nullable().comment("联系电话"))
}

/// 権限管理（管理者、ロール、メニュー、API）
pub fn rbac_entities() -> Vec<EntityDescriptor> {
    vec![admin(), role(), menu(), api()]
}

/// コンテンツ管理
pub fn content_entities() -> Vec<EntityDescriptor> {
    vec![
        post(),
        tag(),
        category(),
        column(),
        comment(),
        config(),
        resource(),
    ]
}

/// 業務管理（ユーザー、プロジェクト）
pub fn business_entities() -> Vec<EntityDescriptor> {
    vec![user(), user_event(), project(), third_party_accounts()]
}

/// 運営管理（広告、ポイント、ログ、フィードバック）
pub fn operation_entities() -> Vec<EntityDescriptor> {
    vec![
        ad_scene(),
        ad(),
        point_log(),
        point_deduction(),
        point_available(),
        operation_log(),
        feedback(),
    ]
}

/// ストア（商品、注文）
pub fn store_entities() -> Vec<EntityDescriptor> {
    vec![
        product_category(),
        product_type(),
        product_spec(),
        product_spec_item(),
        product(),
        product_sku(),
        order(),
        order_log(),
    ]
}

pub fn system_entities() -> Vec<EntityDescriptor> {
    vec![system_config()]
}

/// カタログ全体を宣言順で取得
pub fn catalog() -> Vec<EntityDescriptor> {
    vec![
        user(),
        admin(),
        user_event(),
        role(),
        menu(),
        api(),
        post(),
        tag(),
        category(),
        column(),
        comment(),
        project(),
        config(),
        resource(),
        ad_scene(),
        ad(),
        point_log(),
        point_deduction(),
        point_available(),
        product_category(),
        product_type(),
        product_spec(),
        product_spec_item(),
        product(),
        product_sku(),
        order(),
        order_log(),
        system_config(),
        operation_log(),
        third_party_accounts(),
        feedback(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_is_valid() {
        for descriptor in catalog() {
            assert!(
                descriptor.validate().is_ok(),
                "{}: {:?}",
                descriptor.table,
                descriptor.validate()
            );
        }
    }

    #[test]
    fn test_catalog_order_and_size() {
        let tables: Vec<String> = catalog().into_iter().map(|d| d.table).collect();
        assert_eq!(tables.len(), 31);
        assert_eq!(tables.first().map(String::as_str), Some("user"));
        assert_eq!(tables.last().map(String::as_str), Some("feedback"));

        let unique: HashSet<&String> = tables.iter().collect();
        assert_eq!(unique.len(), tables.len());
    }

    #[test]
    fn test_groups_cover_catalog() {
        let mut grouped: Vec<String> = [
            rbac_entities(),
            content_entities(),
            business_entities(),
            operation_entities(),
            store_entities(),
            system_entities(),
        ]
        .into_iter()
        .flatten()
        .map(|d| d.table)
        .collect();
        grouped.sort();

        let mut all: Vec<String> = catalog().into_iter().map(|d| d.table).collect();
        all.sort();

        assert_eq!(grouped, all);
    }

    #[test]
    fn test_join_tables() {
        let admin = admin();
        assert_eq!(admin.join_tables.len(), 1);
        assert_eq!(admin.join_tables[0].table, "admin_roles");
        assert_eq!(admin.join_tables[0].peer_table, "role");

        let role = role();
        assert_eq!(role.join_tables[0].table, "role_menus");
        assert_eq!(role.join_tables[0].peer_column, "menu_id");
    }

    #[test]
    fn test_index_names_are_unique() {
        let mut names = HashSet::new();
        for descriptor in catalog() {
            for index in descriptor.all_indexes() {
                assert!(names.insert(index.name.clone()), "重複: {}", index.name);
            }
        }
    }
}
