#![allow(dead_code)]

use std::fs;
use std::path::Path;

pub const AUTH_SERVICE: &str = "services/authService.ts";
pub const AUTH_LINE: &str = "const API_BASE = 'http://192.168.15.14:3000';\n";

/// Lay out a small React Native tree with a location list under `.iprewire/`.
pub fn seed_project(root: &Path) {
    fs::create_dir_all(root.join("services")).unwrap();
    fs::create_dir_all(root.join("components/usuario")).unwrap();
    fs::create_dir_all(root.join(".iprewire")).unwrap();

    fs::write(root.join(AUTH_SERVICE), AUTH_LINE).unwrap();
    fs::write(
        root.join("components/usuario/cadUsuario.tsx"),
        "await fetch(`http://192.168.15.14:3000/usuarios`);\n",
    )
    .unwrap();
    fs::write(
        root.join(".iprewire/locations.yaml"),
        concat!(
            "locations:\n",
            "  - file: services/authService.ts\n",
            "    line: 1\n",
            "    pattern: \"http://[0-9.]+:3000\"\n",
            "  - file: components/usuario/cadUsuario.tsx\n",
            "    line: 1\n",
            "    pattern: \"http://[0-9.]+:3000/usuarios\"\n",
            "  - file: services/syncManager.ts\n",
            "    line: 269\n",
            "    pattern: \"http://[0-9.]+:3000\"\n",
        ),
    )
    .unwrap();
}

pub fn read(root: &Path, rel: &str) -> String {
    fs::read_to_string(root.join(rel)).unwrap()
}
