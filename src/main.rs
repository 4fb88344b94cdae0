use the_sequence::{
    config::Config, renderer::spawn_renderer, routes, sequence_actor::SequenceActor,
    state::LiveState,
};

use tokio::net::TcpListener;

#[tokio::main]
async fn main() {
    let subscriber = tracing_subscriber::fmt::Subscriber::builder()
        .with_max_level(tracing::Level::INFO)
        .finish();

    tracing::subscriber::set_global_default(subscriber).unwrap();

    let config = Config {
        // The original advanced once every π seconds.
        advance_interval: std::time::Duration::from_secs_f64(std::f64::consts::PI),
        port: std::env::args()
            .nth(1)
            .map(|port| port.parse::<u16>().expect("port must be a number"))
            .unwrap_or(3000),
    };

    let (sequence, updates) = SequenceActor::make(config);

    spawn_renderer(updates);

    let state = LiveState { sequence };

    let router = routes::make_router(state);

    let url = format!("0.0.0.0:{}", config.port);

    let listener = TcpListener::bind(url).await.unwrap();
    axum::serve(listener, router.into_make_service())
        .await
        .unwrap();
}
