use super::entity::{fill_short_id, int, text, Entity};
use crate::shared::errors::AppResult;
use rusqlite::types::Value;
use serde::{Deserialize, Serialize};

/// 商品規格の値
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductSpecItem {
    pub id: i64,
    pub item_id: String,
    /// 所属する規格の短縮ID
    pub spec_id: String,
    pub title: String,
    pub sort: i64,
}

impl Entity for ProductSpecItem {
    const TABLE: &'static str = "product_spec_item";

    fn id(&self) -> i64 {
        self.id
    }

    /// item_id は作成時に一度だけ採番する
    fn before_create(&mut self) -> AppResult<()> {
        fill_short_id(&mut self.item_id);
        Ok(())
    }

    fn values(&self) -> Vec<(&'static str, Value)> {
        vec![
            ("id", int(self.id)),
            ("item_id", text(&self.item_id)),
            ("spec_id", text(&self.spec_id)),
            ("title", text(&self.title)),
            ("sort", int(self.sort)),
        ]
    }
}
