fn main() {
    multiversx_sc_meta_lib::cli_main::<crowdfund_factory::AbiProvider>();
}
