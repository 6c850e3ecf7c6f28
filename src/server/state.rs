#[derive(Debug, Clone)]
pub(crate) struct AppState {
    echo_created_order: bool,
}

impl AppState {
    pub fn new(echo_created_order: bool) -> Self {
        Self { echo_created_order }
    }

    pub fn echoes_created_order(&self) -> bool {
        self.echo_created_order
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn app_state() {
        assert!(AppState::new(true).echoes_created_order());
        assert!(!AppState::new(false).clone().echoes_created_order());
    }
}
