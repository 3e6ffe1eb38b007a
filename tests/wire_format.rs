use camerashop_api::{
    dto::{
        cart::{CartItemDto, CartList},
        feedback::FeedbackList,
        image::{ImageDto, ImageList},
    },
    models::{Feedback, Product, User},
};
use serde_json::json;

fn product() -> Product {
    Product {
        id: 7,
        name: "Fujifilm X100VI".into(),
        description: Some("Compact, 40MP".into()),
        price: 1_599_000,
    }
}

fn user() -> User {
    User {
        id: 3,
        username: "linh".into(),
        email: "linh@example.com".into(),
        full_name: None,
    }
}

#[test]
fn cart_item_survives_json_round_trip() {
    let item = CartItemDto::new(1, 2, product(), user());

    let text = serde_json::to_string(&item).unwrap();
    let back: CartItemDto = serde_json::from_str(&text).unwrap();

    assert_eq!(back.cart_id, 1);
    assert_eq!(back.quantity, 2);
    assert_eq!(back.product, item.product);
    assert_eq!(back.user, item.user);
    assert_eq!(back, item);
}

#[test]
fn cart_item_inlines_product_and_user() {
    let value = serde_json::to_value(CartItemDto::new(1, 2, product(), user())).unwrap();

    assert_eq!(value["cartId"], json!(1));
    assert_eq!(value["quantity"], json!(2));
    assert_eq!(value["product"]["name"], json!("Fujifilm X100VI"));
    assert_eq!(value["user"]["email"], json!("linh@example.com"));
    assert_eq!(value["user"]["fullName"], json!(null));
}

#[test]
fn cart_item_accepts_legacy_id_field() {
    let value = json!({
        "idCart": 9,
        "quantity": 1,
        "product": { "id": 7, "name": "Lens cap", "description": null, "price": 90000 },
        "user": {
            "id": 3,
            "username": "linh",
            "email": "linh@example.com",
            "fullName": "Tran Linh"
        }
    });

    let item: CartItemDto = serde_json::from_value(value).unwrap();
    assert_eq!(item.cart_id, 9);
    assert_eq!(item.user.full_name.as_deref(), Some("Tran Linh"));
}

#[test]
fn image_fields_read_back_exactly() {
    let image = ImageDto::new(None, "http://example.com/a.png", None, Some(5));

    assert_eq!(image.id, None);
    assert_eq!(image.url, "http://example.com/a.png");
    assert_eq!(image.order, None);
    assert_eq!(image.product_id, Some(5));
    assert!(!image.is_persisted());
}

#[test]
fn image_uses_flat_scalar_fields() {
    let image = ImageDto::new(Some(11), "http://example.com/b.png", Some(2), Some(5));
    let value = serde_json::to_value(&image).unwrap();

    assert_eq!(
        value,
        json!({ "id": 11, "url": "http://example.com/b.png", "order": 2, "productId": 5 })
    );

    let back: ImageDto = serde_json::from_value(value).unwrap();
    assert_eq!(back, image);
    assert!(back.is_persisted());
}

#[test]
fn image_missing_optionals_deserialize_as_none() {
    let image: ImageDto = serde_json::from_str(r#"{"url":"http://example.com/c.png"}"#).unwrap();

    assert_eq!(image, ImageDto::new(None, "http://example.com/c.png", None, None));
}

#[test]
fn list_payloads_share_bare_array_shape() {
    let carts = CartList {
        items: vec![CartItemDto::new(1, 2, product(), user())],
    };
    let images = ImageList {
        items: vec![ImageDto::new(Some(1), "http://example.com/a.png", Some(1), Some(7))],
    };
    let feedback = FeedbackList {
        items: vec![Feedback::default()],
    };

    let carts = serde_json::to_value(&carts).unwrap();
    let images = serde_json::to_value(&images).unwrap();
    let feedback = serde_json::to_value(&feedback).unwrap();

    assert_eq!(carts.as_array().map(Vec::len), Some(1));
    assert_eq!(carts[0]["cartId"], json!(1));
    assert_eq!(images.as_array().map(Vec::len), Some(1));
    assert_eq!(images[0]["productId"], json!(7));
    assert_eq!(feedback.as_array().map(Vec::len), Some(1));
    assert_eq!(feedback[0]["isRead"], json!(false));
}
