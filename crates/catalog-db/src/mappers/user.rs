//! User model -> entity mapper

use catalog_core::entities::User;

use crate::models::UserModel;

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: model.id,
            email: model.email,
            user_name: model.user_name,
            display_name: model.display_name,
            otp: model.otp,
            otp_count: model.otp_count,
            last_otp_at: model.last_otp_at,
            created_at: model.created_at,
            modified_at: model.modified_at,
            deleted_at: model.deleted_at,
        }
    }
}
