//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use rust_decimal::Decimal;
use salvo::{affix_state::inject, prelude::*};

use storefront::{
    cart::CartItem,
    checkout::{DeliveryForm, OrderId, OrderRecord},
    products::{PLACEHOLDER_IMAGE, Product, ProductId},
};
use storefront_app::{
    context::AppContext,
    domain::{addresses::MockAddressesService, products::MockProductsService},
    email::MockEmailService,
};

use crate::state::State;

pub(crate) const TEST_PORT: u16 = 3001;

fn strict_products_mock() -> MockProductsService {
    let mut products = MockProductsService::new();

    products.expect_list_products().never();
    products.expect_get_product().never();
    products.expect_create_product().never();
    products.expect_update_product().never();
    products.expect_delete_product().never();

    products
}

fn strict_addresses_mock() -> MockAddressesService {
    let mut addresses = MockAddressesService::new();

    addresses.expect_list_addresses().never();
    addresses.expect_get_address().never();
    addresses.expect_create_address().never();
    addresses.expect_update_address().never();
    addresses.expect_delete_address().never();

    addresses
}

fn strict_email_mock() -> MockEmailService {
    let mut email = MockEmailService::new();

    email.expect_send_order_confirmation().never();

    email
}

fn state(
    products: MockProductsService,
    addresses: MockAddressesService,
    email: MockEmailService,
) -> Arc<State> {
    State::from_app_context(
        AppContext {
            products: Arc::new(products),
            addresses: Arc::new(addresses),
            email: Arc::new(email),
        },
        TEST_PORT,
    )
}

pub(crate) fn strict_state() -> Arc<State> {
    state(
        strict_products_mock(),
        strict_addresses_mock(),
        strict_email_mock(),
    )
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state(
                products,
                strict_addresses_mock(),
                strict_email_mock(),
            )))
            .push(route),
    )
}

pub(crate) fn addresses_service(addresses: MockAddressesService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state(
                strict_products_mock(),
                addresses,
                strict_email_mock(),
            )))
            .push(route),
    )
}

pub(crate) fn email_service(email: MockEmailService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state(
                strict_products_mock(),
                strict_addresses_mock(),
                email,
            )))
            .push(route),
    )
}

pub(crate) fn make_product(id: u64) -> Product {
    Product {
        id: ProductId::new(id),
        name: "Neem Oil".to_string(),
        price: Decimal::new(1250, 2),
        description: "Cold-pressed, 500ml".to_string(),
        image: PLACEHOLDER_IMAGE.to_string(),
    }
}

pub(crate) fn make_address(id: u64) -> OrderRecord {
    OrderRecord {
        id: OrderId::new(id),
        delivery: DeliveryForm {
            full_name: "Asha Rao".to_string(),
            email: "asha@example.com".to_string(),
            mobile: "9000000000".to_string(),
            street_address: "12 MG Road".to_string(),
            city: "Pune".to_string(),
            state: "Maharashtra".to_string(),
            country: "India".to_string(),
            postal_code: "411001".to_string(),
            payment_method: "cash_on_delivery".to_string(),
        },
        cart_items: vec![CartItem {
            product: make_product(1),
            quantity: 2,
        }],
        total: Decimal::new(25, 0),
        order_date: Timestamp::UNIX_EPOCH,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: None,
    }
}
