fn main() -> ! {
    platform_launcher::run_main(platform_launcher::BUILD_COMMAND)
}
