use std::io::Write as _;

use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use crate::api::Backend;
use crate::board::StatusBoard;
use crate::config::Config;
use crate::error::ApiError;
use crate::models::status::Status;
use crate::notify::Notice;
use crate::roster::{RosterQuery, SortDir, SortKey};
use crate::session::{self, Session};

type Input = Lines<BufReader<Stdin>>;

/// Outcome of one command in the board loop.
enum Flow {
    Continue,
    Logout,
    Quit,
}

pub async fn run(config: Config) {
    let backend = match Backend::from_config(&config) {
        Ok(backend) => backend,
        Err(err) => {
            Notice::for_error(&err).emit();
            return;
        }
    };
    let mut input = BufReader::new(tokio::io::stdin()).lines();

    println!("Welcome to MyWorkStatus");
    loop {
        let Some(session) = login_prompt(&backend, &mut input).await else {
            return;
        };
        match board_loop(&config, &backend, session, &mut input).await {
            Flow::Quit => return,
            // back to the login view; local state was already dropped
            _ => {}
        }
    }
}

/// The login view: prompt until a session is established. Returns None on
/// end of input.
async fn login_prompt(backend: &Backend, input: &mut Input) -> Option<Session> {
    loop {
        let email = prompt("email: ", input).await?;
        let password = prompt("password: ", input).await?;
        match session::login(backend, &email, &password).await {
            Ok(session) => {
                Notice::success("Logged in").emit();
                return Some(session);
            }
            // stay on the login view; the user may always retry
            Err(err) => Notice::for_error(&err).emit(),
        }
    }
}

/// The authenticated view: one task, one loop, selecting over stdin commands
/// and the roster poll. Leaving the loop drops the interval and any in-flight
/// fetch with it, so nothing writes state after teardown.
async fn board_loop(
    config: &Config,
    backend: &Backend,
    session: Session,
    input: &mut Input,
) -> Flow {
    let mut board = StatusBoard::new(backend.clone(), session);
    let mut query = RosterQuery::default();

    if let Err(err) = board.load_me_status().await {
        if expired(&err, backend) {
            return Flow::Logout;
        }
        Notice::for_error(&err).emit();
    }
    if let Err(err) = board.refresh().await {
        if expired(&err, backend) {
            return Flow::Logout;
        }
        Notice::for_error(&err).emit();
    }
    Notice::success("You logged in successfully").emit();
    render(&board, &query);
    println!("Type 'help' for commands.");

    // first tick only after a full interval; the initial fetch just happened
    let mut poll = interval_at(Instant::now() + config.poll_interval, config.poll_interval);
    poll.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            _ = poll.tick() => {
                tracing::debug!("roster poll");
                if let Err(err) = board.refresh().await {
                    if expired(&err, backend) {
                        return Flow::Logout;
                    }
                    Notice::for_error(&err).emit();
                }
            }
            line = input.next_line() => {
                let Ok(Some(line)) = line else { return Flow::Quit };
                match command(&mut board, &mut query, backend, line.trim()).await {
                    Flow::Continue => {}
                    flow => return flow,
                }
            }
        }
    }
}

async fn command(
    board: &mut StatusBoard,
    query: &mut RosterQuery,
    backend: &Backend,
    line: &str,
) -> Flow {
    let (cmd, rest) = match line.split_once(' ') {
        Some((cmd, rest)) => (cmd, rest.trim()),
        None => (line, ""),
    };
    match cmd {
        "" => {}
        "help" => help(),
        "list" => render(board, query),
        "me" => {
            println!(
                "{} — {}",
                board.session.display_name,
                board.me_status().label()
            );
        }
        "search" => {
            query.search = rest.to_string();
            render(board, query);
        }
        "filter" => match Status::parse(rest) {
            Some(status) => {
                query.toggle_status(status);
                render(board, query);
            }
            None => Notice::info("Unknown status. Try e.g. 'filter On Vacation'.").emit(),
        },
        "sort" => match rest {
            "name" => {
                query.toggle_sort(SortKey::Name);
                render(board, query);
            }
            "status" => {
                query.toggle_sort(SortKey::Status);
                render(board, query);
            }
            _ => Notice::info("Sort by 'name' or 'status'.").emit(),
        },
        "status" => match Status::parse(rest) {
            Some(next) => match board.set_my_status(next).await {
                Ok(true) => Notice::success("Status updated").emit(),
                Ok(false) => Notice::info("That is already your status.").emit(),
                Err(err) => {
                    if expired(&err, backend) {
                        return Flow::Logout;
                    }
                    Notice::for_error(&err).emit();
                }
            },
            None => Notice::info("Unknown status. Try e.g. 'status Working Remotely'.").emit(),
        },
        "refresh" => {
            match board.refresh().await {
                Ok(()) => render(board, query),
                Err(err) => {
                    if expired(&err, backend) {
                        return Flow::Logout;
                    }
                    Notice::for_error(&err).emit();
                }
            }
        }
        "logout" => {
            session::logout(backend);
            return Flow::Logout;
        }
        "quit" | "exit" => {
            session::logout(backend);
            return Flow::Quit;
        }
        _ => Notice::info("Unknown command. Type 'help'.").emit(),
    }
    Flow::Continue
}

/// Session-expired handling is the same everywhere: notice, best-effort
/// server logout, back to the login view.
fn expired(err: &ApiError, backend: &Backend) -> bool {
    if matches!(err, ApiError::SessionExpired) {
        Notice::for_error(err).emit();
        session::logout(backend);
        true
    } else {
        false
    }
}

fn render(board: &StatusBoard, query: &RosterQuery) {
    let rows = board.view(query);
    println!();
    println!(
        "{} — {}",
        board.session.display_name,
        board.me_status().label()
    );
    if let Some(at) = board.last_updated {
        println!("roster updated {}", at.format("%H:%M:%S"));
    }
    println!("{:<28} {}", "Name", "Status");
    for row in &rows {
        println!("{:<28} {}", row.full_name(), row.status.label());
    }
    let dir = match query.sort_dir {
        SortDir::Asc => "asc",
        SortDir::Desc => "desc",
    };
    let key = match query.sort_key {
        SortKey::Name => "name",
        SortKey::Status => "status",
    };
    println!("{} shown, sorted by {key} ({dir})", rows.len());
}

fn help() {
    println!("commands:");
    println!("  list                 show the roster");
    println!("  me                   show your own status");
    println!("  search <text>        filter by name (empty to clear)");
    println!("  filter <status>      toggle a status filter");
    println!("  sort name|status     toggle sort key/direction");
    println!("  status <value>       set your own status");
    println!("  refresh              fetch the roster now");
    println!("  logout | quit");
}

async fn prompt(label: &str, input: &mut Input) -> Option<String> {
    print!("{label}");
    let _ = std::io::stdout().flush();
    match input.next_line().await {
        Ok(Some(line)) => Some(line),
        _ => None,
    }
}
