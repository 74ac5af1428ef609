pub mod account;
pub mod character;
pub mod health;
pub mod inventory;
pub mod item;
pub mod server;

use axum::Router;

use crate::state::AppState;

/// Build the game route tree.
///
/// Every route takes a JSON body, including `GET` and `DELETE`.
///
/// ```text
/// POST   /account/new            create account
/// GET    /account/login          check credentials
/// GET    /account/status         get status
/// POST   /account/status         set status
/// GET    /account/characters     characters owned by account
///
/// GET    /server/status          get status
/// POST   /server/status          set status
/// GET    /server/characters      characters on server
///
/// POST   /character/new          create character
/// DELETE /character/delete       delete character
///
/// GET    /inventory/all          list inventory stacks
/// POST   /inventory/all          replace inventory
///
/// POST   /item                   create item
/// GET    /item                   get item by id (list of 0 or 1)
/// GET    /item/all               list all items
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/account", account::router())
        .nest("/server", server::router())
        .nest("/character", character::router())
        .nest("/inventory", inventory::router())
        .nest("/item", item::router())
}
