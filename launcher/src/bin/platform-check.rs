fn main() -> ! {
    platform_launcher::run_main(platform_launcher::CHECK_COMMAND)
}
