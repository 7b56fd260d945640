use super::{core::Effect, main::ImageIdentifier};
use crate::error::IdentifyError;
use crate::image_identifier::core::{init, is_stale, transition, Msg};

impl ImageIdentifier {
    /// Processes messages until [`ImageIdentifier::shutdown`] is called.
    pub fn run(&self) -> Result<(), IdentifyError> {
        let (mut current_state, effects) = init(&self.config);
        self.store(current_state.clone());
        self.render(&current_state);
        self.execute_effects(effects);

        loop {
            let msg = self.recv()?;
            let shutdown = matches!(msg, Msg::Shutdown);

            if is_stale(&current_state, &msg) {
                let _ = self.logger.info(&format!(
                    "Discarding stale classification: {}",
                    msg.to_display_string()
                ));
            }

            let _ = self.logger.info(&format!(
                "\nold state:\n\t{:?}\n\nmsg:\n\t{}",
                current_state,
                msg.to_display_string(),
            ));

            let (new_state, effects) = transition(current_state, msg);

            let _ = self.logger.info(&format!(
                "\nnew state:\n\t{:?}\n\neffects:\n\t{:?}",
                new_state,
                effects
                    .iter()
                    .map(Effect::to_display_string)
                    .collect::<Vec<_>>()
            ));

            current_state = new_state;
            self.store(current_state.clone());
            self.render(&current_state);

            if shutdown {
                for effect in effects {
                    self.run_effect(effect);
                }
                let _ = self.logger.info("Stopped");
                return Ok(());
            }

            self.execute_effects(effects);
        }
    }

    fn execute_effects(&self, effects: Vec<Effect>) {
        for effect in effects {
            let self_clone = self.clone();
            std::thread::spawn(move || self_clone.run_effect(effect));
        }
    }
}
