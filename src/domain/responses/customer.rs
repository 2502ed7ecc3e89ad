use crate::model::Customer;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CustomerResponse {
    #[serde(rename = "CustomerID")]
    pub customer_id: i32,

    #[serde(rename = "FirstName")]
    pub first_name: String,

    #[serde(rename = "LastName")]
    pub last_name: String,

    #[serde(rename = "Email")]
    pub email: Option<String>,

    #[serde(rename = "Address")]
    pub address: Option<String>,

    #[serde(rename = "Phone")]
    pub phone: Option<String>,
}

impl From<Customer> for CustomerResponse {
    fn from(value: Customer) -> Self {
        CustomerResponse {
            customer_id: value.customer_id,
            first_name: value.first_name,
            last_name: value.last_name,
            email: value.email,
            address: value.address,
            phone: value.phone,
        }
    }
}
