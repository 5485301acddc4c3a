/*
 * Licensed to the Apache Software Foundation (ASF) under one or more
 * contributor license agreements.  See the NOTICE file distributed with
 * this work for additional information regarding copyright ownership.
 * The ASF licenses this file to You under the Apache License, Version 2.0
 * (the "License"); you may not use this file except in compliance with
 * the License.  You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

//! `pulsarctl tenants ...`

mod create_tenant_sub_command;
mod delete_tenant_sub_command;
mod get_tenant_sub_command;
mod list_tenants_sub_command;

pub use create_tenant_sub_command::create_tenant;
pub use create_tenant_sub_command::CreateTenantSubCommand;
pub use delete_tenant_sub_command::delete_tenant;
pub use delete_tenant_sub_command::DeleteTenantSubCommand;
pub use get_tenant_sub_command::get_tenant;
pub use get_tenant_sub_command::GetTenantSubCommand;
pub use list_tenants_sub_command::list_tenants;
pub use list_tenants_sub_command::ListTenantsSubCommand;

use crate::commands::registry::ResourceGroup;

pub(crate) const SUPER_USER_PERMISSION: &str = "This command requires super-user permissions.";

pub(crate) const TENANT_ONLY_ONE_NAME: (&str, &str) = (
    "the tenant name is not specified or more than one name is given",
    "[✖]  only one argument is allowed to be used as a name",
);

pub(crate) const TENANT_NAME_NOT_SPECIFIED: (&str, &str) = (
    "the tenant name is not specified or more than one name is given",
    "[✖]  the name is not specified or specified more than once",
);

pub(crate) const TENANT_NAME_INVALID: (&str, &str) = (
    "the tenant name contains characters that are not allowed",
    "[✖]  Invalid tenant name 'a b': contains invalid character ' '",
);

pub(crate) const TENANT_NOT_EXIST: (&str, &str) = (
    "the specified tenant does not exist",
    "[✖]  code: 404 reason: Tenant does not exist",
);

pub fn group() -> ResourceGroup {
    ResourceGroup::new("tenants", "Operations about tenants")
        .verb(ListTenantsSubCommand::verb())
        .verb(GetTenantSubCommand::verb())
        .verb(CreateTenantSubCommand::verb())
        .verb(DeleteTenantSubCommand::verb())
}
