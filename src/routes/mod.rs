use actix_web::web;

pub mod backend_health;
pub mod gateway;
pub mod odds;
pub mod video;

pub fn init_odds_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(backend_health::backend_health)
        .service(odds::get_sports)
        .service(odds::get_markets)
        .service(odds::get_leagues)
        .service(odds::get_event);
}

pub fn init_video_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(backend_health::backend_health)
        .service(video::search)
        .service(video::get_related)
        .service(video::get_comments)
        .service(video::get_video)
        .service(video::get_channel);
}

pub fn init_gateway_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(backend_health::backend_health)
        .service(gateway::sports)
        .service(gateway::markets)
        .service(gateway::leagues)
        .service(gateway::event)
        .service(gateway::search)
        .service(gateway::related_videos)
        .service(gateway::video_comments)
        .service(gateway::video)
        .service(gateway::channel)
        .service(gateway::aggregate_videos);
}
