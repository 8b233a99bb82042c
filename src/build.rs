// build.rs
fn main() {
    #[cfg(windows)]
    {
        let mut res = winres::WindowsResource::new();
        res.set_icon("assets/maps_pin.ico");
        res.compile().unwrap();
    }
}
