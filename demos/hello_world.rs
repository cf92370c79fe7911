use morse_converter::MorseSession;

#[tokio::main]
async fn main() {
    env_logger::init();

    let mut session = MorseSession::new();
    session.set_text("Hello World");
    session.set_unit_ms(150);
    session.set_volume(0.8);
    println!("{}", session.morse());

    if let Some(handle) = session.play() {
        handle.finished().await;
    }
}
