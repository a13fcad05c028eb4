boxray_engine::tracing_targets! {
    MAIN = "main",
    UI = "ui",
    SURFACE = "surface",
}
