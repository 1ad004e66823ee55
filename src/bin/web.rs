//! Single binary web server: JSON REST API for the cricket community app.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default so the app is reachable via DNS on a VPS.
//! Override with env: HOST (e.g. 0.0.0.0), PORT (e.g. 8080), ADMIN_PASSWORD.
//!
//! Authentication is an upstream concern: the reverse proxy in front of this
//! service resolves the session and forwards the principal as an `X-User-Id`
//! header (a UUID minted by `POST /api/auth/signin`). Requests without the
//! header are treated as unauthenticated.

use actix_web::{
    get, post, put,
    web::{Data, Json, Path},
    App, HttpRequest, HttpResponse, HttpServer, Responder, ResponseError,
};
use gully_cricket_web::{
    all_messages, all_players, complete_profile, create_match, create_player, create_tournament,
    live_matches, logic::auth::current_user, make_admin, mark_message_read, match_by_id,
    matches_by_tournament, my_player, my_teams, my_tournaments, register_team, respond_to_message,
    send_message, sign_in, teams_by_tournament, tournament_by_id, unread_count,
    update_match_score, update_payment_status, update_player, update_tournament_status,
    upcoming_tournaments, verify_phone, AppError, Db, MatchId, MessageId, NewTournament,
    PaymentStatus, PlayerDetails, PlayerId, ScoreUpdate, TeamId, TeamPlayer, TournamentId,
    TournamentStatus, UserId,
};
use serde::Deserialize;
use std::sync::RwLock;
use uuid::Uuid;

/// Shared entity store. One writer at a time: each mutating request holds
/// the lock for its whole read-modify-write.
type AppState = Data<RwLock<Db>>;

/// Settings read from the environment at startup.
struct AppConfig {
    admin_password: String,
}

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Deserialize)]
struct SignInBody {
    name: Option<String>,
    email: Option<String>,
}

#[derive(Deserialize)]
struct CompleteProfileBody {
    full_name: String,
    phone_number: String,
}

#[derive(Deserialize)]
struct VerifyPhoneBody {
    otp: String,
}

#[derive(Deserialize)]
struct MakeAdminBody {
    admin_password: String,
}

#[derive(Deserialize)]
struct RegisterTeamBody {
    tournament_id: TournamentId,
    team_name: String,
    players: Vec<TeamPlayer>,
}

#[derive(Deserialize)]
struct PaymentStatusBody {
    status: PaymentStatus,
}

#[derive(Deserialize)]
struct TournamentStatusBody {
    status: TournamentStatus,
}

#[derive(Deserialize)]
struct CreateMatchBody {
    tournament_id: TournamentId,
    team1_id: TeamId,
    team2_id: TeamId,
    match_date: String,
}

#[derive(Deserialize)]
struct SendMessageBody {
    subject: String,
    content: String,
}

#[derive(Deserialize)]
struct RespondBody {
    response: String,
}

/// Path segment: user id (e.g. /api/users/{id})
#[derive(Deserialize)]
struct UserPath {
    id: UserId,
}

/// Path segment: player id (e.g. /api/players/{id})
#[derive(Deserialize)]
struct PlayerPath {
    id: PlayerId,
}

/// Path segment: tournament id (e.g. /api/tournaments/{id})
#[derive(Deserialize)]
struct TournamentPath {
    id: TournamentId,
}

/// Path segment: team id (e.g. /api/teams/{id})
#[derive(Deserialize)]
struct TeamPath {
    id: TeamId,
}

/// Path segment: match id (e.g. /api/matches/{id})
#[derive(Deserialize)]
struct MatchPath {
    id: MatchId,
}

/// Path segment: message id (e.g. /api/messages/{id})
#[derive(Deserialize)]
struct MessagePath {
    id: MessageId,
}

/// The principal resolved by the upstream auth layer, if any.
fn caller_id(req: &HttpRequest) -> Option<UserId> {
    req.headers()
        .get("X-User-Id")?
        .to_str()
        .ok()
        .and_then(|value| Uuid::parse_str(value).ok())
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "gully-cricket-web",
    })
}

/// Find or create the account for this principal (stands in for the
/// identity provider's first-authentication hook).
#[post("/api/auth/signin")]
async fn api_sign_in(state: AppState, body: Json<SignInBody>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let body = body.into_inner();
    let user = sign_in(&mut g, body.name, body.email);
    HttpResponse::Ok().json(user)
}

/// The caller's account record.
#[get("/api/users/me")]
async fn api_me(state: AppState, req: HttpRequest) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match current_user(&g, caller_id(&req)) {
        Ok(user) => HttpResponse::Ok().json(user),
        Err(e) => e.error_response(),
    }
}

/// Complete the caller's profile (assigns the sequential unique id).
#[post("/api/users/me/profile")]
async fn api_complete_profile(
    state: AppState,
    req: HttpRequest,
    body: Json<CompleteProfileBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let body = body.into_inner();
    match complete_profile(&mut g, caller_id(&req), body.full_name, body.phone_number) {
        Ok(user) => HttpResponse::Ok().json(user),
        Err(e) => e.error_response(),
    }
}

/// Verify the caller's phone with a six-digit OTP.
#[post("/api/users/me/verify-phone")]
async fn api_verify_phone(
    state: AppState,
    req: HttpRequest,
    body: Json<VerifyPhoneBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match verify_phone(&mut g, caller_id(&req), &body.otp) {
        Ok(user) => HttpResponse::Ok().json(user),
        Err(e) => e.error_response(),
    }
}

/// Promote a user to admin, guarded by the configured admin password.
#[post("/api/users/{id}/make-admin")]
async fn api_make_admin(
    state: AppState,
    config: Data<AppConfig>,
    path: Path<UserPath>,
    body: Json<MakeAdminBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match make_admin(&mut g, path.id, &body.admin_password, &config.admin_password) {
        Ok(user) => {
            log::info!("User {} promoted to admin", user.id);
            HttpResponse::Ok().json(user)
        }
        Err(e) => e.error_response(),
    }
}

/// Create the caller's player profile.
#[post("/api/players")]
async fn api_create_player(
    state: AppState,
    req: HttpRequest,
    body: Json<PlayerDetails>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match create_player(&mut g, caller_id(&req), body.into_inner()) {
        Ok(id) => HttpResponse::Ok().json(serde_json::json!({ "id": id })),
        Err(e) => e.error_response(),
    }
}

/// Active players with their owner's display fields.
#[get("/api/players")]
async fn api_all_players(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    HttpResponse::Ok().json(all_players(&g))
}

/// The caller's own player profile (null if none).
#[get("/api/players/me")]
async fn api_my_player(state: AppState, req: HttpRequest) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    HttpResponse::Ok().json(my_player(&g, caller_id(&req)))
}

/// Edit a player profile (owner only).
#[put("/api/players/{id}")]
async fn api_update_player(
    state: AppState,
    req: HttpRequest,
    path: Path<PlayerPath>,
    body: Json<PlayerDetails>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match update_player(&mut g, caller_id(&req), path.id, body.into_inner()) {
        Ok(player) => HttpResponse::Ok().json(player),
        Err(e) => e.error_response(),
    }
}

/// Create a tournament (admin only).
#[post("/api/tournaments")]
async fn api_create_tournament(
    state: AppState,
    req: HttpRequest,
    body: Json<NewTournament>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match create_tournament(&mut g, caller_id(&req), body.into_inner()) {
        Ok(id) => {
            log::info!("Tournament {} created", id);
            HttpResponse::Ok().json(serde_json::json!({ "id": id }))
        }
        Err(e) => e.error_response(),
    }
}

/// Tournaments open for registration.
#[get("/api/tournaments")]
async fn api_upcoming_tournaments(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    HttpResponse::Ok().json(upcoming_tournaments(&g))
}

/// Tournaments created by the caller (admins).
#[get("/api/tournaments/mine")]
async fn api_my_tournaments(state: AppState, req: HttpRequest) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    HttpResponse::Ok().json(my_tournaments(&g, caller_id(&req)))
}

/// Get a tournament by id (404 if not found).
#[get("/api/tournaments/{id}")]
async fn api_get_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match tournament_by_id(&g, path.id) {
        Some(tournament) => HttpResponse::Ok().json(tournament),
        None => AppError::NotFound.error_response(),
    }
}

/// Set a tournament's status (admin only).
#[put("/api/tournaments/{id}/status")]
async fn api_update_tournament_status(
    state: AppState,
    req: HttpRequest,
    path: Path<TournamentPath>,
    body: Json<TournamentStatusBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match update_tournament_status(&mut g, caller_id(&req), path.id, body.status) {
        Ok(tournament) => {
            log::info!("Tournament {} set to {:?}", tournament.id, tournament.status);
            HttpResponse::Ok().json(tournament)
        }
        Err(e) => e.error_response(),
    }
}

/// Teams registered for a tournament.
#[get("/api/tournaments/{id}/teams")]
async fn api_teams_by_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    HttpResponse::Ok().json(teams_by_tournament(&g, path.id))
}

/// Matches scheduled in a tournament.
#[get("/api/tournaments/{id}/matches")]
async fn api_matches_by_tournament(state: AppState, path: Path<TournamentPath>) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    HttpResponse::Ok().json(matches_by_tournament(&g, path.id))
}

/// Register a team for a tournament.
#[post("/api/teams")]
async fn api_register_team(
    state: AppState,
    req: HttpRequest,
    body: Json<RegisterTeamBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let body = body.into_inner();
    match register_team(
        &mut g,
        caller_id(&req),
        body.tournament_id,
        body.team_name,
        body.players,
    ) {
        Ok(id) => HttpResponse::Ok().json(serde_json::json!({ "id": id })),
        Err(e) => e.error_response(),
    }
}

/// The caller's teams with their tournaments.
#[get("/api/teams/mine")]
async fn api_my_teams(state: AppState, req: HttpRequest) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    HttpResponse::Ok().json(my_teams(&g, caller_id(&req)))
}

/// Set a team's payment status (admin only).
#[put("/api/teams/{id}/payment-status")]
async fn api_update_payment_status(
    state: AppState,
    req: HttpRequest,
    path: Path<TeamPath>,
    body: Json<PaymentStatusBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match update_payment_status(&mut g, caller_id(&req), path.id, body.status) {
        Ok(team) => {
            log::info!("Team {} payment set to {:?}", team.id, team.payment_status);
            HttpResponse::Ok().json(team)
        }
        Err(e) => e.error_response(),
    }
}

/// Schedule a match between two teams (admin only).
#[post("/api/matches")]
async fn api_create_match(
    state: AppState,
    req: HttpRequest,
    body: Json<CreateMatchBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let body = body.into_inner();
    match create_match(
        &mut g,
        caller_id(&req),
        body.tournament_id,
        body.team1_id,
        body.team2_id,
        body.match_date,
    ) {
        Ok(id) => HttpResponse::Ok().json(serde_json::json!({ "id": id })),
        Err(e) => e.error_response(),
    }
}

/// Matches currently live.
#[get("/api/matches/live")]
async fn api_live_matches(state: AppState) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    HttpResponse::Ok().json(live_matches(&g))
}

/// Get a match by id (404 if not found).
#[get("/api/matches/{id}")]
async fn api_get_match(state: AppState, path: Path<MatchPath>) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match match_by_id(&g, path.id) {
        Some(m) => HttpResponse::Ok().json(m),
        None => AppError::NotFound.error_response(),
    }
}

/// Apply a partial score update to a match (admin only).
#[put("/api/matches/{id}/score")]
async fn api_update_match_score(
    state: AppState,
    req: HttpRequest,
    path: Path<MatchPath>,
    body: Json<ScoreUpdate>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match update_match_score(&mut g, caller_id(&req), path.id, body.into_inner()) {
        Ok(m) => HttpResponse::Ok().json(m),
        Err(e) => e.error_response(),
    }
}

/// Send a message to the admins.
#[post("/api/messages")]
async fn api_send_message(
    state: AppState,
    req: HttpRequest,
    body: Json<SendMessageBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let body = body.into_inner();
    match send_message(&mut g, caller_id(&req), body.subject, body.content) {
        Ok(id) => HttpResponse::Ok().json(serde_json::json!({ "id": id })),
        Err(e) => e.error_response(),
    }
}

/// The whole inbox, newest first (admin only).
#[get("/api/messages")]
async fn api_all_messages(state: AppState, req: HttpRequest) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match all_messages(&g, caller_id(&req)) {
        Ok(messages) => HttpResponse::Ok().json(messages),
        Err(e) => e.error_response(),
    }
}

/// Unread message count (0 for non-admins).
#[get("/api/messages/unread-count")]
async fn api_unread_count(state: AppState, req: HttpRequest) -> HttpResponse {
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    HttpResponse::Ok().json(unread_count(&g, caller_id(&req)))
}

/// Mark a message read (admin only, idempotent).
#[put("/api/messages/{id}/read")]
async fn api_mark_message_read(
    state: AppState,
    req: HttpRequest,
    path: Path<MessagePath>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match mark_message_read(&mut g, caller_id(&req), path.id) {
        Ok(message) => HttpResponse::Ok().json(message),
        Err(e) => e.error_response(),
    }
}

/// Respond to a message (admin only).
#[put("/api/messages/{id}/respond")]
async fn api_respond_to_message(
    state: AppState,
    req: HttpRequest,
    path: Path<MessagePath>,
    body: Json<RespondBody>,
) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let body = body.into_inner();
    match respond_to_message(&mut g, caller_id(&req), path.id, body.response) {
        Ok(message) => HttpResponse::Ok().json(message),
        Err(e) => e.error_response(),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_admin_password() -> String {
    "change-me".to_string()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let admin_password =
        std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| default_admin_password());
    if admin_password == default_admin_password() {
        log::warn!("ADMIN_PASSWORD not set; using the default password");
    }
    log::info!("Starting server at http://{}:{}", host, port);

    let state = Data::new(RwLock::new(Db::new()));
    let config = Data::new(AppConfig { admin_password });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .app_data(config.clone())
            .service(api_health)
            .service(api_sign_in)
            .service(api_me)
            .service(api_complete_profile)
            .service(api_verify_phone)
            .service(api_make_admin)
            .service(api_create_player)
            .service(api_all_players)
            .service(api_my_player)
            .service(api_update_player)
            .service(api_create_tournament)
            .service(api_upcoming_tournaments)
            .service(api_my_tournaments)
            .service(api_get_tournament)
            .service(api_update_tournament_status)
            .service(api_teams_by_tournament)
            .service(api_matches_by_tournament)
            .service(api_register_team)
            .service(api_my_teams)
            .service(api_update_payment_status)
            .service(api_create_match)
            .service(api_live_matches)
            .service(api_get_match)
            .service(api_update_match_score)
            .service(api_send_message)
            .service(api_all_messages)
            .service(api_unread_count)
            .service(api_mark_message_read)
            .service(api_respond_to_message)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
