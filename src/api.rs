// API client module: a small blocking client for the backend's device
// ("client") management endpoints. It logs in with email and password, keeps
// the resulting session (bearer token plus session cookie) and attaches it to
// every later request.

use std::fmt;
use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, COOKIE};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::config::{normalize_backend, AppInfo, ClientConfig, Credentials};
use crate::endpoint::Endpoint;
use crate::error::ApiError;
use crate::models::{
    DeleteDeviceRequest, Device, DeviceType, DeviceUpdate, LoginRequest, PreKey, SelfUpdate,
    TokenData,
};
use crate::transport::{Cookie, Method, ReqwestTransport, Request, Response, Transport};
use crate::util::shorten;

/// The identity obtained by logging in. Replaced as a whole whenever the
/// backend rotates the cookie, and dropped on logout.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    /// Full `Authorization` header value, `<token_type> <access_token>`.
    pub token: String,
    pub cookie: Option<Cookie>,
    pub user_id: String,
    /// Token lifetime in seconds, as reported at login.
    pub expires_in: u64,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("token", &shorten(&self.token, 12))
            .field("cookie", &self.cookie.as_ref().map(|cookie| &cookie.name))
            .field("user_id", &self.user_id)
            .field("expires_in", &self.expires_in)
            .finish()
    }
}

/// API client holding the transport, the `https` base URL of the backend,
/// the account credentials and, once logged in, the session.
///
/// Every request is sent with both the bearer token and the session cookie
/// when they are known. A session counts as active as soon as a token is
/// held; the cookie is optional because not every backend sets one.
pub struct ApiClient<T = ReqwestTransport> {
    transport: T,
    base_url: Url,
    credentials: Credentials,
    timeout: Duration,
    cookie_name: String,
    session: Option<Session>,
}

impl ApiClient<ReqwestTransport> {
    /// Create an `ApiClient` talking to the real backend over reqwest.
    ///
    /// # Errors
    ///
    /// * If the backend host is not usable in an `https` URL
    /// * If the HTTP client cannot be built
    pub fn from_config(config: &ClientConfig, app: &AppInfo) -> Result<Self, ApiError> {
        Self::with_transport(config, ReqwestTransport::new(app)?)
    }
}

impl<T: Transport> ApiClient<T> {
    /// # Errors
    ///
    /// * If the backend host is not usable in an `https` URL
    pub fn with_transport(config: &ClientConfig, transport: T) -> Result<Self, ApiError> {
        let host = normalize_backend(&config.backend);
        let invalid = || ApiError::InvalidBackend(config.backend.clone());
        if host.is_empty() {
            return Err(invalid());
        }
        let base_url = Url::parse(&format!("https://{host}/")).map_err(|_| invalid())?;
        if base_url.host_str().is_none() {
            return Err(invalid());
        }

        log::debug!("ApiClient: backend={base_url} timeout={:?}", config.timeout);

        Ok(Self {
            transport,
            base_url,
            credentials: config.credentials.clone(),
            timeout: config.timeout,
            cookie_name: config.cookie_name.clone(),
            session: None,
        })
    }

    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    #[must_use]
    pub const fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Returns whether a login has succeeded and not been undone by logout.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Log in with the stored credentials. `persistent` asks the backend for
    /// a long-lived (`permanent`) session instead of a `temporary` one.
    ///
    /// A failed login leaves the current session as it was.
    ///
    /// # Errors
    ///
    /// * If the backend answers with anything but 200
    /// * If the token in the response cannot be decoded or is empty
    /// * If the request cannot be sent
    pub fn login(&mut self, persistent: bool) -> Result<&Session, ApiError> {
        let client_type = if persistent {
            DeviceType::Permanent
        } else {
            DeviceType::Temporary
        };
        let body = json_body(&LoginRequest {
            email: self.credentials.email.clone(),
            password: self.credentials.password.clone(),
            client_type,
        })?;

        let response = self.request(Method::Post, Endpoint::Login, Some(body), false)?;
        let token: TokenData = decode(&response.body)?;
        if token.access_token.is_empty() || token.token_type.is_empty() {
            log::debug!("login: response carried no usable token");
            return Err(ApiError::EmptyToken);
        }
        let cookie = response.cookie(&self.cookie_name).cloned();
        let authorization = token.authorization();

        log::debug!(
            "login: user={} token={} expires_in={} cookie={}",
            token.user,
            shorten(&authorization, 12),
            token.expires_in,
            cookie.is_some()
        );

        Ok(&*self.session.insert(Session {
            token: authorization,
            cookie,
            user_id: token.user,
            expires_in: token.expires_in,
        }))
    }

    /// Invalidate the session on the backend and forget it locally.
    ///
    /// # Errors
    ///
    /// * If there is no session
    /// * If the backend answers with anything but 200
    /// * If the request cannot be sent
    pub fn logout(&mut self) -> Result<(), ApiError> {
        self.request(Method::Post, Endpoint::Logout, None, true)?;
        self.session = None;
        log::debug!("logout: session cleared");
        Ok(())
    }

    /// All devices registered to the account.
    ///
    /// # Errors
    ///
    /// * If there is no session
    /// * If the backend answers with anything but 200
    /// * If the response is not a list of devices
    /// * If the request cannot be sent
    pub fn list_devices(&mut self) -> Result<Vec<Device>, ApiError> {
        let response = self.request(Method::Get, Endpoint::Clients, None, true)?;
        decode(&response.body)
    }

    /// # Errors
    ///
    /// * If there is no session
    /// * If the backend answers with anything but 200
    /// * If the response is not a device
    /// * If the request cannot be sent
    pub fn get_device(&mut self, id: &str) -> Result<Device, ApiError> {
        let response = self.request(Method::Get, Endpoint::Client(id), None, true)?;
        decode(&response.body)
    }

    /// Update the label and/or pre-keys of a device. Fields passed as `None`
    /// are not sent.
    ///
    /// # Errors
    ///
    /// * If there is no session
    /// * If the backend answers with anything but 200
    /// * If the request cannot be sent
    pub fn update_device(
        &mut self,
        id: &str,
        label: Option<&str>,
        prekeys: Option<&[PreKey]>,
    ) -> Result<(), ApiError> {
        let body = json_body(&DeviceUpdate {
            label: label.map(ToString::to_string),
            prekeys: prekeys.map(<[PreKey]>::to_vec),
        })?;
        self.request(Method::Put, Endpoint::Client(id), Some(body), true)?;
        Ok(())
    }

    /// Delete a device. The backend wants the account password as
    /// confirmation, so it is always part of the body.
    ///
    /// # Errors
    ///
    /// * If there is no session
    /// * If the backend answers with anything but 200
    /// * If the request cannot be sent
    pub fn delete_device(&mut self, id: &str) -> Result<(), ApiError> {
        let body = json_body(&DeleteDeviceRequest {
            password: &self.credentials.password,
        })?;
        self.request(Method::Delete, Endpoint::Client(id), Some(body), true)?;
        Ok(())
    }

    /// # Errors
    ///
    /// * If there is no session
    /// * If the backend answers with anything but 200
    /// * If the request cannot be sent
    pub fn update_self(&mut self, update: &SelfUpdate) -> Result<(), ApiError> {
        let body = json_body(update)?;
        self.request(Method::Put, Endpoint::SelfProfile, Some(body), true)?;
        Ok(())
    }

    fn build_url(&self, endpoint: &Endpoint<'_>) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ApiError::InvalidBackend(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(endpoint.segments());
        Ok(url)
    }

    /// Headers sent with every request: JSON content type plus whatever part
    /// of the session is known.
    fn headers(&self) -> Vec<(String, String)> {
        let mut headers = vec![(CONTENT_TYPE.to_string(), "application/json".to_string())];
        if let Some(session) = &self.session {
            headers.push((AUTHORIZATION.to_string(), session.token.clone()));
            if let Some(cookie) = &session.cookie {
                log::trace!("Setting a cookie named \"{}\"", cookie.name);
                headers.push((COOKIE.to_string(), cookie.header_value()));
            }
        }
        headers
    }

    fn request(
        &mut self,
        method: Method,
        endpoint: Endpoint<'_>,
        body: Option<Vec<u8>>,
        requires_session: bool,
    ) -> Result<Response, ApiError> {
        if requires_session && self.session.is_none() {
            log::debug!("{method} {endpoint:?}: no session, request not sent");
            return Err(ApiError::NotAuthenticated);
        }

        let request = Request {
            method,
            url: self.build_url(&endpoint)?,
            headers: self.headers(),
            body,
            timeout: self.timeout,
        };
        log::debug!(
            "Sending {method} request to \"{}\" with timeout {:?}",
            request.url,
            request.timeout
        );

        let response = self.transport.send(request)?;
        log::debug!("Got response status code {}", response.status);

        if response.status != 200 {
            return Err(ApiError::UnexpectedStatus {
                code: response.status,
            });
        }

        for cookie in &response.cookies {
            log::trace!("Found a cookie named \"{}\"", cookie.name);
        }
        self.rotate_cookie(&response);

        Ok(response)
    }

    fn rotate_cookie(&mut self, response: &Response) {
        let Some(cookie) = response.cookie(&self.cookie_name) else {
            return;
        };
        if let Some(session) = self.session.take() {
            if session.cookie.as_ref() != Some(cookie) {
                log::debug!("Rotating session cookie \"{}\"", cookie.name);
            }
            self.session = Some(Session {
                cookie: Some(cookie.clone()),
                ..session
            });
        }
    }
}

fn json_body<P: Serialize + ?Sized>(payload: &P) -> Result<Vec<u8>, ApiError> {
    serde_json::to_vec(payload).map_err(ApiError::Encode)
}

fn decode<D: DeserializeOwned>(body: &[u8]) -> Result<D, ApiError> {
    serde_json::from_slice(body).map_err(ApiError::Decode)
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;
    use crate::models::DeviceClass;
    use crate::transport::stub::StubTransport;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    const LOGIN_BODY: &str =
        r#"{"access_token":"abc","token_type":"Bearer","expires_in":900,"user":"u1"}"#;

    const LOGIN_BODY_LONG_TOKEN: &str =
        r#"{"access_token":"0123456789abcdef","token_type":"Bearer","expires_in":900,"user":"u1"}"#;

    fn config(backend: &str) -> ClientConfig {
        ClientConfig::new(backend, Credentials::new("me@example.com", "secret"))
    }

    fn client(transport: StubTransport) -> ApiClient<StubTransport> {
        ApiClient::with_transport(&config("https://example.com"), transport).unwrap()
    }

    fn logged_in(transport: StubTransport) -> ApiClient<StubTransport> {
        let mut api = client(transport);
        api.login(false).unwrap();
        api
    }

    #[test_log::test]
    fn login_stores_token_and_cookie() {
        let transport = StubTransport::new().respond_with_cookies(
            200,
            LOGIN_BODY,
            vec![Cookie::new("zuid", "z1")],
        );
        let mut api = client(transport);

        let session = api.login(false).unwrap().clone();

        assert_eq!(session.token, "Bearer abc");
        assert_eq!(session.cookie, Some(Cookie::new("zuid", "z1")));
        assert_eq!(session.user_id, "u1");
        assert_eq!(session.expires_in, 900);
        assert!(api.is_authenticated());

        let requests = api.transport().requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::Post);
        assert_eq!(requests[0].url.as_str(), "https://example.com/login");
        assert_eq!(requests[0].header("Content-Type"), Some("application/json"));
        assert_eq!(requests[0].header("Authorization"), None);
        drop(requests);
        assert_eq!(
            api.transport().last_body_json(),
            Some(json!({
                "email": "me@example.com",
                "password": "secret",
                "clientType": "temporary"
            }))
        );
    }

    #[test_log::test]
    fn login_without_cookie_still_creates_session() {
        let mut api = client(StubTransport::new().respond(200, LOGIN_BODY));
        let session = api.login(false).unwrap();
        assert_eq!(session.token, "Bearer abc");
        assert_eq!(session.cookie, None);
    }

    #[test_log::test]
    fn persistent_login_asks_for_permanent_client_type() {
        let mut api = client(StubTransport::new().respond(200, LOGIN_BODY));
        api.login(true).unwrap();
        assert_eq!(
            api.transport().last_body_json().unwrap()["clientType"],
            json!("permanent")
        );
    }

    #[test_log::test]
    fn rejected_login_is_unexpected_status_and_leaves_no_session() {
        let mut api = client(StubTransport::new().respond(403, r#"{"code":403}"#));

        let err = api.login(false).unwrap_err();

        assert!(matches!(err, ApiError::UnexpectedStatus { code: 403 }));
        assert_eq!(err.status(), Some(403));
        assert!(!api.is_authenticated());
        assert_eq!(api.session(), None);
    }

    #[test_log::test]
    fn malformed_login_body_is_decode_error() {
        let mut api = client(StubTransport::new().respond(200, r#"{"token":"abc"}"#));
        let err = api.login(false).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
        assert!(!api.is_authenticated());
    }

    #[test_log::test]
    fn empty_token_is_rejected_and_leaves_no_session() {
        let transport = StubTransport::new()
            .respond(
                200,
                r#"{"access_token":"","token_type":"","expires_in":900,"user":"u1"}"#,
            )
            .respond(
                200,
                r#"{"access_token":"abc","token_type":"","expires_in":900,"user":"u1"}"#,
            );
        let mut api = client(transport);

        assert!(matches!(api.login(false), Err(ApiError::EmptyToken)));
        assert!(matches!(api.login(false), Err(ApiError::EmptyToken)));
        assert!(!api.is_authenticated());
        assert!(matches!(api.list_devices(), Err(ApiError::NotAuthenticated)));
        assert_eq!(api.transport().call_count(), 2);
    }

    #[test_log::test]
    fn session_debug_hides_full_token() {
        let mut api = client(StubTransport::new().respond(200, LOGIN_BODY_LONG_TOKEN));
        let debug = format!("{:?}", api.login(false).unwrap());
        assert!(debug.contains("u1"));
        assert!(!debug.contains("0123456789abcdef"));
    }

    #[test_log::test]
    fn session_operations_before_login_send_nothing() {
        let mut api = client(StubTransport::new());

        let results = vec![
            api.list_devices().map(|_| ()),
            api.get_device("c1").map(|_| ()),
            api.update_device("c1", Some("phone"), None),
            api.delete_device("c1"),
            api.update_self(&SelfUpdate::default()),
            api.logout(),
        ];

        for result in results {
            assert!(matches!(result, Err(ApiError::NotAuthenticated)));
        }
        assert_eq!(api.transport().call_count(), 0);
    }

    #[test_log::test]
    fn list_devices_sends_bearer_token() {
        let transport = StubTransport::new()
            .respond(200, LOGIN_BODY)
            .respond(200, r#"[{"id":"c1","label":"phone"}]"#);
        let mut api = logged_in(transport);

        let devices = api.list_devices().unwrap();

        assert_eq!(devices.len(), 1);
        assert_eq!(devices[0].id, "c1");
        assert_eq!(devices[0].label.as_deref(), Some("phone"));

        let requests = api.transport().requests();
        assert_eq!(requests[1].method, Method::Get);
        assert_eq!(requests[1].url.as_str(), "https://example.com/clients");
        assert_eq!(requests[1].header("Authorization"), Some("Bearer abc"));
    }

    #[test_log::test]
    fn session_cookie_is_sent_and_rotated() {
        let transport = StubTransport::new()
            .respond_with_cookies(200, LOGIN_BODY, vec![Cookie::new("zuid", "z1")])
            .respond_with_cookies(200, "[]", vec![Cookie::new("zuid", "z2")])
            .respond(200, "[]");
        let mut api = logged_in(transport);

        api.list_devices().unwrap();
        assert_eq!(
            api.session().and_then(|session| session.cookie.clone()),
            Some(Cookie::new("zuid", "z2"))
        );
        api.list_devices().unwrap();

        let requests = api.transport().requests();
        assert_eq!(requests[1].header("Cookie"), Some("zuid=z1"));
        assert_eq!(requests[2].header("Cookie"), Some("zuid=z2"));
        assert_eq!(requests[2].header("Authorization"), Some("Bearer abc"));
    }

    #[test_log::test]
    fn other_cookies_do_not_replace_session_cookie() {
        let transport = StubTransport::new()
            .respond_with_cookies(200, LOGIN_BODY, vec![Cookie::new("zuid", "z1")])
            .respond_with_cookies(200, "[]", vec![Cookie::new("tracking", "t1")]);
        let mut api = logged_in(transport);

        api.list_devices().unwrap();

        assert_eq!(
            api.session().and_then(|session| session.cookie.clone()),
            Some(Cookie::new("zuid", "z1"))
        );
    }

    #[test_log::test]
    fn custom_cookie_name_is_used_for_rotation() {
        let transport = StubTransport::new()
            .respond_with_cookies(200, LOGIN_BODY, vec![Cookie::new("sid", "s1")]);
        let config = config("example.com").with_cookie_name("sid");
        let mut api = ApiClient::with_transport(&config, transport).unwrap();

        let session = api.login(false).unwrap();

        assert_eq!(session.cookie, Some(Cookie::new("sid", "s1")));
    }

    #[test_log::test]
    fn delete_device_sends_password() {
        let transport = StubTransport::new()
            .respond(200, LOGIN_BODY)
            .respond(200, "");
        let mut api = logged_in(transport);

        api.delete_device("c1").unwrap();

        assert_eq!(
            api.transport().last_body_json(),
            Some(json!({ "password": "secret" }))
        );
        let requests = api.transport().requests();
        assert_eq!(requests[1].method, Method::Delete);
        assert_eq!(requests[1].url.as_str(), "https://example.com/clients/c1");
    }

    #[test_log::test]
    fn get_device_decodes_single_record() {
        let transport = StubTransport::new()
            .respond(200, LOGIN_BODY)
            .respond(200, r#"{"id":"c1","class":"phone","model":"Pixel"}"#);
        let mut api = logged_in(transport);

        let device = api.get_device("c1").unwrap();

        assert_eq!(device.id, "c1");
        assert_eq!(device.class, Some(DeviceClass::Phone));
        assert_eq!(device.model.as_deref(), Some("Pixel"));
        assert_eq!(
            api.transport().requests()[1].url.as_str(),
            "https://example.com/clients/c1"
        );
    }

    #[test_log::test]
    fn device_ids_are_escaped_in_urls() {
        let transport = StubTransport::new()
            .respond(200, LOGIN_BODY)
            .respond(200, r#"{"id":"a/b"}"#);
        let mut api = logged_in(transport);

        api.get_device("a/b").unwrap();

        assert_eq!(
            api.transport().requests()[1].url.as_str(),
            "https://example.com/clients/a%2Fb"
        );
    }

    #[test_log::test]
    fn update_device_sends_only_given_fields() {
        let transport = StubTransport::new()
            .respond(200, LOGIN_BODY)
            .respond(200, "")
            .respond(200, "");
        let mut api = logged_in(transport);

        api.update_device("c1", Some("phone"), None).unwrap();
        assert_eq!(
            api.transport().last_body_json(),
            Some(json!({ "label": "phone" }))
        );

        let prekeys = [PreKey {
            id: 7,
            key: "pk".into(),
        }];
        api.update_device("c1", None, Some(&prekeys)).unwrap();
        assert_eq!(
            api.transport().last_body_json(),
            Some(json!({ "prekeys": [{ "id": 7, "key": "pk" }] }))
        );

        let requests = api.transport().requests();
        assert_eq!(requests[1].method, Method::Put);
        assert_eq!(requests[1].url.as_str(), "https://example.com/clients/c1");
    }

    #[test_log::test]
    fn update_self_puts_profile_fields() {
        let transport = StubTransport::new()
            .respond(200, LOGIN_BODY)
            .respond(200, "");
        let mut api = logged_in(transport);

        api.update_self(&SelfUpdate {
            name: Some("Jane".into()),
            accent_id: Some(2),
            assets: None,
        })
        .unwrap();

        assert_eq!(
            api.transport().last_body_json(),
            Some(json!({ "accent_id": 2, "name": "Jane" }))
        );
        let requests = api.transport().requests();
        assert_eq!(requests[1].method, Method::Put);
        assert_eq!(requests[1].url.as_str(), "https://example.com/self");
    }

    #[test_log::test]
    fn logout_clears_session() {
        let transport = StubTransport::new()
            .respond_with_cookies(200, LOGIN_BODY, vec![Cookie::new("zuid", "z1")])
            .respond(200, "");
        let mut api = logged_in(transport);

        api.logout().unwrap();

        assert!(!api.is_authenticated());
        let requests = api.transport().requests();
        assert_eq!(requests[1].method, Method::Post);
        assert_eq!(requests[1].url.as_str(), "https://example.com/access/logout");
        assert_eq!(requests[1].header("Cookie"), Some("zuid=z1"));
        assert_eq!(requests[1].header("Authorization"), Some("Bearer abc"));
    }

    #[test_log::test]
    fn failed_logout_keeps_session() {
        let transport = StubTransport::new()
            .respond(200, LOGIN_BODY)
            .respond(403, "");
        let mut api = logged_in(transport);

        assert!(matches!(
            api.logout(),
            Err(ApiError::UnexpectedStatus { code: 403 })
        ));
        assert!(api.is_authenticated());
    }

    #[test_log::test]
    fn any_status_but_200_is_unexpected() {
        let transport = StubTransport::new()
            .respond(200, LOGIN_BODY)
            .respond(401, r#"[{"id":"c1"}]"#)
            .respond(204, "");
        let mut api = logged_in(transport);

        assert!(matches!(
            api.list_devices(),
            Err(ApiError::UnexpectedStatus { code: 401 })
        ));
        assert!(matches!(
            api.delete_device("c1"),
            Err(ApiError::UnexpectedStatus { code: 204 })
        ));
    }

    #[test_log::test]
    fn undecodable_device_list_is_decode_error() {
        let transport = StubTransport::new()
            .respond(200, LOGIN_BODY)
            .respond(200, "<html>oops</html>");
        let mut api = logged_in(transport);

        assert!(matches!(api.list_devices(), Err(ApiError::Decode(_))));
    }

    #[test_log::test]
    fn transport_failure_is_transport_error() {
        let transport = StubTransport::new()
            .respond(200, LOGIN_BODY)
            .fail(io::ErrorKind::TimedOut);
        let mut api = logged_in(transport);

        assert!(matches!(api.list_devices(), Err(ApiError::Transport(_))));
        assert_eq!(api.transport().call_count(), 2);
    }

    #[test_log::test]
    fn configured_timeout_is_passed_to_transport() {
        let config = config("example.com").with_timeout(Duration::from_millis(2500));
        let transport = StubTransport::new().respond(200, LOGIN_BODY);
        let mut api = ApiClient::with_transport(&config, transport).unwrap();

        api.login(false).unwrap();

        assert_eq!(
            api.transport().requests()[0].timeout,
            Duration::from_millis(2500)
        );
    }

    #[test_log::test]
    fn scheme_prefix_is_replaced_by_https() {
        for backend in ["http://example.com", "https://example.com", "example.com/"] {
            let transport = StubTransport::new().respond(200, LOGIN_BODY);
            let mut api = ApiClient::with_transport(&config(backend), transport).unwrap();

            assert_eq!(api.base_url().as_str(), "https://example.com/");
            api.login(false).unwrap();
            let requests = api.transport().requests();
            assert_eq!(requests[0].url.scheme(), "https");
            assert_eq!(requests[0].url.as_str(), "https://example.com/login");
        }
    }

    #[test_log::test]
    fn backend_path_prefix_is_kept() {
        let transport = StubTransport::new().respond(200, LOGIN_BODY);
        let mut api = ApiClient::with_transport(&config("example.com/api"), transport).unwrap();

        api.login(false).unwrap();

        assert_eq!(
            api.transport().requests()[0].url.as_str(),
            "https://example.com/api/login"
        );
    }

    #[test_log::test]
    fn empty_backend_is_rejected() {
        for backend in ["", "https://", "  "] {
            let result = ApiClient::with_transport(&config(backend), StubTransport::new());
            assert!(matches!(result, Err(ApiError::InvalidBackend(_))));
        }
    }
}
