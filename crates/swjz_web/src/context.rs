pub mod client;

use self::client::Client;
use leptos::prelude::*;

pub fn initialise_context() {
    tracing::trace!("initialising context");

    leptos_meta::provide_meta_context();
    provide_context(Client::new());
}

/// The client provided by the app, or a fresh one outside of it.
pub fn get_client() -> Client {
    use_context::<Client>().unwrap_or_default()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn client_outside_the_app() {
        let _client = Owner::new().with(get_client);
    }

    #[test]
    fn client_from_context() {
        let _client = Owner::new().with(|| {
            initialise_context();
            get_client()
        });
    }
}
