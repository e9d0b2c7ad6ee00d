pub fn main() {
    println!("cargo:rerun-if-env-changed=DEFMT_LOG");

    // 主机测试不需要链接脚本
    if std::env::var("CARGO_CFG_TARGET_OS").as_deref() != Ok("none") {
        return;
    }

    // defmt 配置
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");
    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
}
