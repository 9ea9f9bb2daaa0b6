use actix_web::{web, App, HttpServer, Responder};

async fn hello() -> impl Responder {
    "<h1>Hello!</h1>"
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    HttpServer::new(|| {
        App::new().route("/", web::get().to(hello))
    })
    .bind("127.0.0.1:8080")?
    .run()
    .await
}
