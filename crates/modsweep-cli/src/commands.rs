//! Command handlers for the modsweep binary.

use std::sync::Arc;

use modsweep_panel::{
    DispatchOutcome, Dispatcher, FilePreferenceStore, Visibility, VisibilityController,
};

use crate::cli::{BanArgs, CheckboxState, CheckboxesArgs, DeleteArgs};
use crate::client::{AppContext, CliError, CliResult, moderation_failure};
use crate::surface::ArgSurface;

pub(crate) async fn handle_delete(ctx: &AppContext, args: DeleteArgs) -> CliResult<()> {
    let auth = ctx.session_auth()?;
    let transport = ctx.transport()?;
    let surface = Arc::new(ArgSurface::delete(&args.ids, args.board.clone()));
    let dispatcher = Dispatcher::new(surface, Arc::new(transport), Arc::new(auth));

    match dispatcher.submit().await {
        Ok(DispatchOutcome::Sent { posts }) => {
            println!("Delete requested for {posts} posts (board: {})", args.board);
            Ok(())
        }
        Ok(DispatchOutcome::EmptySelection | DispatchOutcome::AlreadySubmitting) => Ok(()),
        Err(err) => Err(moderation_failure(err)),
    }
}

pub(crate) async fn handle_ban(ctx: &AppContext, args: BanArgs) -> CliResult<()> {
    let auth = ctx.session_auth()?;
    let transport = ctx.transport()?;
    let surface = Arc::new(ArgSurface::ban(
        &args.ids,
        args.board.clone(),
        args.day,
        args.hour,
        args.minute,
        args.reason,
    ));
    let dispatcher = Dispatcher::new(surface, Arc::new(transport), Arc::new(auth));

    match dispatcher.submit().await {
        Ok(DispatchOutcome::Sent { posts }) => {
            println!("Ban requested for {posts} posts (board: {})", args.board);
            Ok(())
        }
        Ok(DispatchOutcome::EmptySelection | DispatchOutcome::AlreadySubmitting) => Ok(()),
        Err(err) => Err(moderation_failure(err)),
    }
}

pub(crate) fn handle_checkboxes(ctx: &AppContext, args: CheckboxesArgs) -> CliResult<()> {
    let store = Arc::new(FilePreferenceStore::new(ctx.prefs_path()?));
    let mut controller = VisibilityController::new(store);

    match args.state {
        Some(CheckboxState::Show) => {
            controller.set_checkboxes(true).map_err(CliError::failure)?;
            println!("Selection checkboxes shown.");
        }
        Some(CheckboxState::Hide) => {
            controller.set_checkboxes(false).map_err(CliError::failure)?;
            println!("Selection checkboxes hidden.");
        }
        None => {
            let state = match controller.checkboxes() {
                Visibility::Shown => "shown",
                Visibility::Hidden => "hidden",
            };
            println!("Selection checkboxes are {state}.");
        }
    }
    Ok(())
}
