mod transcription_service_test;
