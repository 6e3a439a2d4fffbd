mod actors;
mod api;
mod app_system;
mod clients;
mod config;
mod domain;
mod error;
mod form;
mod messages;
mod shell;
mod store;

#[cfg(test)]
mod mock_framework;

use tracing::{debug, error, info, warn, Instrument};

use crate::app_system::{setup_tracing, AdminSystem};
use crate::config::AdminConfig;
use crate::form::{FormInput, SubmitGuard};
use crate::shell::{
    page_title, render_dashboard, render_error, render_loading, render_settings,
    render_users_table, CloseReason, Key, Modal, Sidebar, NAV_ITEMS,
};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting admin console");

    let config = AdminConfig::from_env();
    let system = AdminSystem::new(config);

    let mut sidebar = Sidebar::default();
    for item in NAV_ITEMS {
        println!("[{}] {}", item.path, item.label);
    }
    sidebar.toggle();
    debug!(collapsed = sidebar.is_collapsed(), "Sidebar toggled");

    println!("== {} ==", page_title("/dashboard"));
    println!("{}", render_dashboard());

    println!("== {} ==", page_title("/users"));
    println!("{}", render_loading());

    let span = tracing::info_span!("users_page");
    let loaded = async {
        info!("Fetching users from remote source");
        system.query_client.get_users().await
    }
    .instrument(span)
    .await;

    if let Err(e) = loaded {
        error!(error = %e, "Failed to load users");
        println!("{}", render_error(&e.to_string()));
        system.shutdown().await?;
        return Ok(());
    }

    let view = system
        .store_client
        .filtered_view(String::new())
        .await
        .map_err(|e| e.to_string())?;
    println!("{}", render_users_table(&view, ""));

    // Toggle the first listed user's activation status
    if let Some(first) = view.users.first() {
        let id = first.id();
        let span = tracing::info_span!("status_toggle");
        async {
            info!(user_id = id, "Toggling user status");
            system.store_client.toggle_status(id).await
        }
        .instrument(span)
        .await
        .map_err(|e| e.to_string())?;
    }

    // Create a user through the modal form flow
    let mut modal = Modal::new();
    let mut guard = SubmitGuard::default();
    modal.open("Create New User");
    debug!(
        title = modal.title(),
        scroll_locked = modal.is_scroll_locked(),
        "Modal opened"
    );

    let input = FormInput::new("Ada Lovelace", "ada@example.com");
    match form::validate(&input) {
        Ok(payload) => {
            if guard.try_begin() {
                let span = tracing::info_span!("user_creation");
                async {
                    info!(user_name = %payload.name, "Submitting new user");
                    system.store_client.submit(None, payload).await
                }
                .instrument(span)
                .await
                .map_err(|e| e.to_string())?;
                guard.finish();
            }
            debug!(in_flight = guard.is_in_flight(), "Submit settled");
            modal.close(CloseReason::CloseButton);
        }
        Err(errors) => {
            warn!(?errors, "Form validation failed");
            modal.close(CloseReason::CloseButton);
        }
    }

    // Edit the first remote user, re-homing it into the local list
    let merged = system
        .store_client
        .merged_view()
        .await
        .map_err(|e| e.to_string())?;
    if let Some(editing) = merged.first().cloned() {
        modal.open("Edit User");
        let input = FormInput::new(editing.record.name.clone(), "updated@example.com");
        if let Ok(payload) = form::validate(&input) {
            let span = tracing::info_span!("user_edit");
            async {
                info!(user_id = editing.id(), "Submitting user edit");
                system.store_client.submit(Some(editing), payload).await
            }
            .instrument(span)
            .await
            .map_err(|e| e.to_string())?;
        }
        modal.close(CloseReason::CloseButton);
    }

    // Abandon a second edit with the escape key
    modal.open("Edit User");
    modal.handle_key(Key::Escape);
    debug!(open = modal.is_open(), "Edit abandoned");

    // Search the merged list
    let query = "ada";
    let view = system
        .store_client
        .filtered_view(query.to_string())
        .await
        .map_err(|e| e.to_string())?;
    println!("Search results for {query:?}:");
    println!("{}", render_users_table(&view, query));

    println!("== {} ==", page_title("/settings"));
    println!("{}", render_settings());

    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
