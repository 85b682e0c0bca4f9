// Generates the `Vault` gRPC client and server stubs.
//
// The protobuf messages are declared by hand in `src/presentation/grpc/proto.rs`
// (see `proto/vault.proto` for the wire schema), so only the service plumbing
// is generated here and no `protoc` install is needed.

fn main() {
    let message = |name: &str| format!("crate::presentation::grpc::proto::{name}");

    let service = tonic_build::manual::Service::builder()
        .name("Vault")
        .package("vault")
        .method(
            tonic_build::manual::Method::builder()
                .name("hash")
                .route_name("Hash")
                .input_type(&message("HashRequest"))
                .output_type(&message("HashResponse"))
                .codec_path("tonic::codec::ProstCodec")
                .build(),
        )
        .method(
            tonic_build::manual::Method::builder()
                .name("validate")
                .route_name("Validate")
                .input_type(&message("ValidateRequest"))
                .output_type(&message("ValidateResponse"))
                .codec_path("tonic::codec::ProstCodec")
                .build(),
        )
        .build();

    tonic_build::manual::Builder::new().compile(&[service]);

    println!("cargo:rerun-if-changed=build.rs");
}
