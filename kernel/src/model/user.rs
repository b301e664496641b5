use crate::model::id::UserId;

// 請求通知の宛先となる入居者
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resident {
    pub user_id: UserId,
    pub user_name: String,
    pub email: String,
}
