use actix_web::middleware::Logger;
use actix_web::web::Data;
use actix_web::{App, HttpResponse, HttpServer, web};
use golf_journal::args;
use golf_journal::controller::{index, round_page, scorecard_totals};
use golf_journal::model::RoundBook;
use log::info;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = args::args_checks();
    let book = Data::new(RoundBook::new(args.rounds));
    info!(
        "serving {} rounds on {}:{}",
        book.rounds().len(),
        args.host,
        args.port
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(book.clone())
            .route("/", web::get().to(index))
            .route("/round/{id}", web::get().to(round_page))
            // relative hx-post from /round/{id}
            .route("/round/scorecard/totals", web::post().to(scorecard_totals))
            .route("/scorecard/totals", web::post().to(scorecard_totals))
            .route("/health", web::get().to(HttpResponse::Ok))
    })
    .bind((args.host.as_str(), args.port))?
    .run()
    .await?;
    Ok(())
}
