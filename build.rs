fn main() {
    println!("cargo:rerun-if-env-changed=FARMTECH_CONFIG");

    // ESP-IDF link arguments only exist when building the firmware image.
    #[cfg(feature = "espidf")]
    embuild::espidf::sysenv::output();
}
