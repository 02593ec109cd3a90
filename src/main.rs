fn main() {
    console_error_panic_hook::set_once();
    game24::log();
    leptos::mount::mount_to_body(game24::client::App);
}
