/// Skip a test unless live AWS resources are configured.
#[macro_export]
macro_rules! skip_without_aws {
    () => {
        if std::env::var("SECURE_ENVIRONMENT_TEST_KMS_KEY").is_err() {
            eprintln!("SKIPPED: SECURE_ENVIRONMENT_TEST_KMS_KEY not set (set to a KMS key ARN)");
            return;
        }
        if std::env::var("SECURE_ENVIRONMENT_TEST_URL").is_err() {
            eprintln!("SKIPPED: SECURE_ENVIRONMENT_TEST_URL not set (set to a writable S3 URL)");
            return;
        }
    };
}
