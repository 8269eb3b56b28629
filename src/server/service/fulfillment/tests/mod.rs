use crate::server::service::fulfillment::payload::SaleEvent;


fn sale(email: &str, product_id: &str) -> SaleEvent {
    SaleEvent {
        email: email.to_string(),
        product_id: product_id.to_string(),
        display_name: "Maria".to_string(),
    }
}
