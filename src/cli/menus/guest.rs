//! Guest session actions

use hindeburg_ssp::core::audit;
use hindeburg_ssp::core::context::SharedContext;
use hindeburg_ssp::core::models::User;
use hindeburg_ssp::external::AuthenticationService;

use crate::console::Console;

/// Ask for credentials and install the authenticated user on success
pub fn login(ctx: &mut SharedContext, console: &Console, auth: &dyn AuthenticationService) {
    let username = console.get_input("Enter your username: ");
    let password = console.get_input("Enter your password: ");

    match auth.login(&username, &password) {
        Ok(session) => {
            audit::log_action(&session.email, "login", &username, audit::SUCCESS);
            ctx.current_user = User::Authenticated {
                email: session.email,
                role: session.role,
            };
            console.display_success(&format!("Logged in as {username}"));
        }
        Err(message) => console.display_error(&message),
    }
}
