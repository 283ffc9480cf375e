//! Acciones del pipeline: funciones puras `(comando, estado) -> estado`.
//!
//! El ejecutor es una composición fija y ordenada; cada acción consume el
//! estado anterior y devuelve uno nuevo. Un error aborta el resto de la
//! secuencia, lo que garantiza que ninguna acción de creación corre si una
//! validación previa falló.
pub mod authors;
pub mod community;
pub mod contributions;
pub mod existence;
pub mod papers;
pub mod publication_info;
pub mod research_fields;
pub mod state;
pub mod subgraph;
pub mod temp_ids;
pub mod thing_definitions;

use crate::errors::ContentTypeError;

/// Paso del pipeline sobre un comando `C` y un estado `S`.
pub trait Action<C, S> {
    fn execute(&self, command: &C, state: S) -> Result<S, ContentTypeError>;
}

/// Ejecuta la lista completa en orden, encadenando el estado.
pub fn execute_all<C, S>(actions: &[Box<dyn Action<C, S>>], command: &C, initial: S) -> Result<S, ContentTypeError> {
    actions.iter().try_fold(initial, |state, action| action.execute(command, state))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Push(&'static str);
    impl Action<(), Vec<&'static str>> for Push {
        fn execute(&self, _command: &(), mut state: Vec<&'static str>) -> Result<Vec<&'static str>, ContentTypeError> {
            state.push(self.0);
            Ok(state)
        }
    }

    struct Fail;
    impl Action<(), Vec<&'static str>> for Fail {
        fn execute(&self, _command: &(), _state: Vec<&'static str>) -> Result<Vec<&'static str>, ContentTypeError> {
            Err(ContentTypeError::Internal("boom".into()))
        }
    }

    #[test]
    fn actions_run_in_order_and_thread_state() {
        let actions: Vec<Box<dyn Action<(), Vec<&'static str>>>> = vec![Box::new(Push("a")), Box::new(Push("b"))];
        let out = execute_all(&actions, &(), Vec::new()).unwrap();
        assert_eq!(out, vec!["a", "b"]);
    }

    #[test]
    fn failure_aborts_the_remaining_actions() {
        let actions: Vec<Box<dyn Action<(), Vec<&'static str>>>> =
            vec![Box::new(Push("a")), Box::new(Fail), Box::new(Push("never"))];
        let err = execute_all(&actions, &(), Vec::new()).unwrap_err();
        assert!(matches!(err, ContentTypeError::Internal(_)));
    }
}
