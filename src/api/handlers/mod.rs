use crate::proxy::Forwarder;

pub mod riot_proxy;

pub struct AppState {
    pub forwarder: Forwarder,
}
