//! Portal - composition root
//!
//! Builds the transport, repository, use case and view model in
//! dependency order and drives the terminal front end.

use std::io::{self, Write};
use std::sync::Arc;

use tracing::info;

use portal_application::GetCharacters;
use portal_domain::{Characters, NetworkResult};
use portal_infrastructure::{
    ApiConfig, DefaultCharactersRepository, ReqwestCharactersApi, TransportError,
};
use portal_ui::{CharacterListView, CharactersViewModel};

/// Wires the full pipeline for `config` and starts the fetch.
///
/// Must be called from within a Tokio runtime.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built.
pub fn compose(config: &ApiConfig) -> Result<CharactersViewModel, TransportError> {
    let api = ReqwestCharactersApi::new(config)?;
    info!(endpoint = %api.endpoint(), "characters client ready");

    let repository = Arc::new(DefaultCharactersRepository::new(api));
    let get_characters = GetCharacters::new(repository);

    Ok(CharactersViewModel::new(get_characters))
}

/// Renders the current state, waits for the fetch to resolve, then
/// renders the outcome. Returns the final state.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub async fn run<W: Write>(
    view_model: &CharactersViewModel,
    out: &mut W,
) -> io::Result<NetworkResult<Characters>> {
    let initial = view_model.current();
    if initial.is_loading() {
        write_lines(out, &CharacterListView::render(&initial))?;
    }

    let resolved = view_model.wait_until_resolved().await;
    write_lines(out, &CharacterListView::render(&resolved))?;
    out.flush()?;

    Ok(resolved)
}

fn write_lines<W: Write>(out: &mut W, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
